//! Site pages used as navigation targets.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A page of the ordering site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Page {
    #[default]
    #[serde(rename = "index.html")]
    Index,
    #[serde(rename = "login.html")]
    Login,
    #[serde(rename = "menu.html")]
    Menu,
    #[serde(rename = "thank-you.html")]
    ThankYou,
}

impl Page {
    /// The page's file name, which is also its navigation target.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Login => "login.html",
            Self::Menu => "menu.html",
            Self::ThankYou => "thank-you.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('/') {
            "index.html" | "" => Ok(Self::Index),
            "login.html" => Ok(Self::Login),
            "menu.html" => Ok(Self::Menu),
            "thank-you.html" => Ok(Self::ThankYou),
            other => Err(format!("unknown page: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_round_trip() {
        for page in [Page::Index, Page::Login, Page::Menu, Page::ThankYou] {
            assert_eq!(page.file_name().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_leading_slash_and_root() {
        assert_eq!("/menu.html".parse::<Page>().unwrap(), Page::Menu);
        assert_eq!("/".parse::<Page>().unwrap(), Page::Index);
    }

    #[test]
    fn test_unknown_page() {
        assert!("about.html".parse::<Page>().is_err());
    }

    #[test]
    fn test_serde_uses_file_name() {
        assert_eq!(
            serde_json::to_string(&Page::ThankYou).unwrap(),
            "\"thank-you.html\""
        );
    }
}
