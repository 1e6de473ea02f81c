//! Page navigation as data.
//!
//! Operations never navigate by themselves. They return a [`NextAction`] and
//! the page layer performs it, which keeps the store testable without a
//! browser.

use core::fmt;

use chill_house_core::Page;

use crate::models::User;

/// Query parameter naming the page to return to after login or signup.
pub const REDIRECT_PARAM: &str = "redirect";

/// A navigation target: a page plus an optional redirect-back parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub page: Page,
    pub redirect_back: Option<Page>,
}

impl Location {
    /// A plain page.
    #[must_use]
    pub const fn page(page: Page) -> Self {
        Self {
            page,
            redirect_back: None,
        }
    }

    /// The login page, returning to `back` once signed in.
    #[must_use]
    pub const fn login_then(back: Page) -> Self {
        Self {
            page: Page::Login,
            redirect_back: Some(back),
        }
    }

    /// Relative URL for this location, e.g. `login.html?redirect=menu.html`.
    #[must_use]
    pub fn href(&self) -> String {
        match self.redirect_back {
            Some(back) => format!(
                "{}?{REDIRECT_PARAM}={}",
                self.page.file_name(),
                urlencoding::encode(back.file_name())
            ),
            None => self.page.file_name().to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// What the page layer should do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    /// Navigate to another page.
    Redirect(Location),
    /// Reload the current page so every widget re-reads the store.
    Reload,
    /// Stay on the current page.
    Stay,
}

impl NextAction {
    /// Shorthand for redirecting to a plain page.
    #[must_use]
    pub const fn redirect(page: Page) -> Self {
        Self::Redirect(Location::page(page))
    }
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redirect(location) => write!(f, "redirect to {location}"),
            Self::Reload => f.write_str("reload"),
            Self::Stay => f.write_str("stay"),
        }
    }
}

/// Read the `redirect` parameter from a page's query string.
///
/// Accepts the string with or without its leading `?`. Only known site pages
/// are honoured; anything else, including absolute URLs, is ignored so the
/// parameter cannot send customers off-site.
#[must_use]
pub fn redirect_param(query: &str) -> Option<Page> {
    let query = query.trim_start_matches('?');
    let value = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned())?;

    if value.is_empty() {
        return None;
    }

    match value.parse::<Page>() {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::warn!(redirect = %value, error = %e, "Ignoring unknown redirect target");
            None
        }
    }
}

/// Where to go after a successful login or signup.
#[must_use]
pub const fn landing(redirect: Option<Page>, default: Page) -> NextAction {
    match redirect {
        Some(page) => NextAction::redirect(page),
        None => NextAction::redirect(default),
    }
}

/// Header state for the auth link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// Shows a "Login" link; the logout link is hidden.
    SignedOut,
    /// Shows a greeting and the logout link.
    SignedIn {
        /// Name shown after "Hi,".
        display_name: String,
    },
}

impl NavState {
    /// Header state for the current session.
    #[must_use]
    pub fn for_session(user: Option<&User>) -> Self {
        user.map_or(Self::SignedOut, |user| Self::SignedIn {
            display_name: user.display_name().to_string(),
        })
    }

    /// Text of the auth link.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::SignedOut => "Login".to_string(),
            Self::SignedIn { display_name } => format!("Hi, {display_name}"),
        }
    }

    /// Target of the auth link.
    #[must_use]
    pub const fn href(&self) -> &'static str {
        match self {
            Self::SignedOut => Page::Login.file_name(),
            Self::SignedIn { .. } => "#",
        }
    }

    /// Whether the logout link is visible.
    #[must_use]
    pub const fn shows_logout(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}
