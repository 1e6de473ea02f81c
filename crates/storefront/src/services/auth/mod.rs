//! Authentication service.
//!
//! Mock email/password accounts kept in the user directory, with the signed-in
//! identity stored alongside. Passwords are compared in plaintext unless
//! hashing is enabled in [`StorefrontConfig`]; hashed and plaintext entries
//! can coexist in one directory.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::instrument;

use chill_house_core::{Email, Page, Password};

use crate::config::StorefrontConfig;
use crate::db::{RepositoryError, SessionRepository, UserRepository};
use crate::models::User;
use crate::navigation::{Location, NavState, NextAction, landing};
use crate::storage::KeyValueStore;

/// A successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    /// The user now in the session.
    pub user: User,
    /// Where to send the customer next.
    pub next: NextAction,
}

/// Result of the sign-in check before ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderGate {
    /// A user is signed in and may order.
    Allowed(User),
    /// Nobody is signed in. The page should offer to go to `login`.
    Blocked {
        /// Login page that returns to the menu afterwards.
        login: Location,
    },
}

/// Authentication service.
///
/// Handles signup, login, logout and the signed-in checks used by the pages.
pub struct AuthService<'a, S: ?Sized> {
    users: UserRepository<'a, S>,
    session: SessionRepository<'a, S>,
    config: &'a StorefrontConfig,
}

impl<'a, S: KeyValueStore + ?Sized> AuthService<'a, S> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a S, config: &'a StorefrontConfig) -> Self {
        Self {
            users: UserRepository::new(store),
            session: SessionRepository::new(store),
            config,
        }
    }

    // =========================================================================
    // Signup / Login
    // =========================================================================

    /// Register a new user and sign them in.
    ///
    /// The email is trimmed and lower-cased; the name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingName`, `AuthError::InvalidEmail` or
    /// `AuthError::EmptyPassword` for blank or malformed fields.
    /// Returns `AuthError::PasswordMismatch` if `password != confirm`.
    /// Returns `AuthError::DuplicateEmail` if the email is registered in any
    /// letter case; the directory is left untouched.
    #[instrument(skip_all, fields(email = %email))]
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
        redirect: Option<Page>,
    ) -> Result<SignedIn, AuthError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = Email::normalize(email)?;
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let stored = if self.config.hash_passwords {
            Password::new(hash_password(password)?)
        } else {
            Password::new(password)
        };
        let user = User::new(name.to_string(), email, stored);

        self.users.insert(&user).map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::DuplicateEmail,
            other => AuthError::Repository(other),
        })?;
        self.session.set(&user)?;

        tracing::info!(email = %user.email, "User signed up");

        Ok(SignedIn {
            user,
            next: landing(redirect, self.config.default_landing),
        })
    }

    /// Sign in with email and password.
    ///
    /// The email matches case-insensitively; the password must match exactly.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no entry matches both. The
    /// session is left unchanged.
    #[instrument(skip_all, fields(email = %email))]
    pub fn login(
        &self,
        email: &str,
        password: &str,
        redirect: Option<Page>,
    ) -> Result<SignedIn, AuthError> {
        let Ok(email) = Email::normalize(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let user = self
            .users
            .find_by_email(&email)?
            .into_iter()
            .find(|u| verify_password(password, &u.password))
            .ok_or(AuthError::InvalidCredentials)?;

        self.session.set(&user)?;

        tracing::info!(email = %user.email, "User logged in");

        Ok(SignedIn {
            user,
            next: landing(redirect, self.config.default_landing),
        })
    }

    /// Sign out and reload the page.
    ///
    /// Always clears the session, whether or not anyone was signed in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be written.
    pub fn logout(&self) -> Result<NextAction, AuthError> {
        self.session.clear()?;
        tracing::info!("User logged out");
        Ok(NextAction::Reload)
    }

    // =========================================================================
    // Session Checks
    // =========================================================================

    /// The signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be read.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session.current()?)
    }

    /// Check that someone is signed in before an order is started.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be read.
    pub fn require_login_for_order(&self) -> Result<OrderGate, AuthError> {
        match self.session.current()? {
            Some(user) => Ok(OrderGate::Allowed(user)),
            None => {
                tracing::debug!("Order blocked, nobody signed in");
                Ok(OrderGate::Blocked {
                    login: Location::login_then(Page::Menu),
                })
            }
        }
    }

    /// Header state for the auth link.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the store cannot be read.
    pub fn nav_state(&self) -> Result<NavState, AuthError> {
        let user = self.session.current()?;
        Ok(NavState::for_session(user.as_ref()))
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Check an entered password against a stored one.
///
/// Stored values that parse as a complete Argon2 PHC string are verified
/// with Argon2. Anything else is a plaintext entry and must be equal, even
/// when it happens to start with `$argon2`.
fn verify_password(password: &str, stored: &Password) -> bool {
    let parsed_hash = stored
        .is_hashed()
        .then(|| PasswordHash::new(stored.expose()).ok())
        .flatten()
        .filter(|hash| {
            hash.hash.is_some()
                && matches!(hash.algorithm.as_str(), "argon2id" | "argon2i" | "argon2d")
        });

    match parsed_hash {
        Some(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        None => password == stored.expose(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::keys;
    use crate::storage::MemoryStore;

    fn seeded_store() -> MemoryStore {
        MemoryStore::from_entries([(
            keys::USERS,
            r#"[{"name":"Ana","email":"a@x.com","password":"p1","points":0}]"#,
        )])
    }

    #[test]
    fn test_signup_creates_user_and_session() {
        let store = MemoryStore::new();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        let signed_in = auth
            .signup(" Ana ", " Ana@X.com ", "p1", "p1", None)
            .unwrap();

        assert_eq!(signed_in.user.name, "Ana");
        assert_eq!(signed_in.user.email.as_str(), "ana@x.com");
        assert_eq!(signed_in.user.points, 0);
        assert_eq!(signed_in.next, NextAction::redirect(Page::Index));

        let users = UserRepository::new(&store).list().unwrap();
        assert_eq!(users, vec![signed_in.user.clone()]);
        assert_eq!(auth.current_user().unwrap(), Some(signed_in.user));
    }

    #[test]
    fn test_signup_honours_redirect() {
        let store = MemoryStore::new();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        let signed_in = auth
            .signup("Ana", "a@x.com", "p1", "p1", Some(Page::Menu))
            .unwrap();
        assert_eq!(signed_in.next, NextAction::redirect(Page::Menu));
    }

    #[test]
    fn test_signup_password_mismatch() {
        let store = MemoryStore::new();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        let err = auth.signup("Ana", "a@x.com", "p1", "p2", None).unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.next_action(), NextAction::Stay);
        assert!(store.is_empty());
    }

    #[test]
    fn test_signup_duplicate_email_any_case() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);
        let before = store.get(keys::USERS).unwrap();

        let err = auth.signup("Other", "A@X.COM", "zz", "zz", None).unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(err.next_action(), NextAction::redirect(Page::Login));
        assert_eq!(store.get(keys::USERS).unwrap(), before);
        assert_eq!(auth.current_user().unwrap(), None);
    }

    #[test]
    fn test_signup_rejects_blank_fields() {
        let store = MemoryStore::new();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        assert!(matches!(
            auth.signup("  ", "a@x.com", "p1", "p1", None),
            Err(AuthError::MissingName)
        ));
        assert!(matches!(
            auth.signup("Ana", "not-an-email", "p1", "p1", None),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            auth.signup("Ana", "a@x.com", "", "", None),
            Err(AuthError::EmptyPassword)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_login_matches_email_case_insensitively() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        let signed_in = auth.login("A@X.com", "p1", None).unwrap();
        assert_eq!(signed_in.user.email.as_str(), "a@x.com");
        assert_eq!(signed_in.next, NextAction::redirect(Page::Index));
        assert_eq!(auth.current_user().unwrap(), Some(signed_in.user));
    }

    #[test]
    fn test_login_wrong_password_keeps_session() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        let err = auth.login("a@x.com", "wrong", None).unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(auth.current_user().unwrap(), None);
    }

    #[test]
    fn test_login_password_is_case_sensitive() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        assert!(matches!(
            auth.login("a@x.com", "P1", None),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unknown_or_malformed_email() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        assert!(matches!(
            auth.login("b@x.com", "p1", None),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("garbage", "p1", None),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_logout_always_clears() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        assert_eq!(auth.logout().unwrap(), NextAction::Reload);

        auth.login("a@x.com", "p1", None).unwrap();
        assert_eq!(auth.logout().unwrap(), NextAction::Reload);
        assert_eq!(auth.current_user().unwrap(), None);
    }

    #[test]
    fn test_require_login_for_order() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        match auth.require_login_for_order().unwrap() {
            OrderGate::Blocked { login } => {
                assert_eq!(login.href(), "login.html?redirect=menu.html");
            }
            OrderGate::Allowed(_) => panic!("expected blocked"),
        }

        auth.login("a@x.com", "p1", None).unwrap();
        assert!(matches!(
            auth.require_login_for_order().unwrap(),
            OrderGate::Allowed(_)
        ));
    }

    #[test]
    fn test_nav_state_follows_session() {
        let store = seeded_store();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        assert_eq!(auth.nav_state().unwrap(), NavState::SignedOut);
        auth.login("a@x.com", "p1", None).unwrap();
        assert_eq!(auth.nav_state().unwrap().label(), "Hi, Ana");
    }

    #[test]
    fn test_hashed_passwords() {
        let store = MemoryStore::new();
        let config = StorefrontConfig {
            hash_passwords: true,
            ..StorefrontConfig::default()
        };
        let auth = AuthService::new(&store, &config);

        let signed_in = auth.signup("Ana", "a@x.com", "s3cret", "s3cret", None).unwrap();
        assert!(signed_in.user.password.is_hashed());
        assert_ne!(signed_in.user.password.expose(), "s3cret");

        auth.logout().unwrap();
        assert!(auth.login("a@x.com", "s3cret", None).is_ok());
        assert!(matches!(
            auth.login("a@x.com", "wrong", None),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_plaintext_entries_still_work_with_hashing_enabled() {
        let store = seeded_store();
        let config = StorefrontConfig {
            hash_passwords: true,
            ..StorefrontConfig::default()
        };
        let auth = AuthService::new(&store, &config);
        assert!(auth.login("a@x.com", "p1", None).is_ok());
    }

    #[test]
    fn test_unparsable_hash_prefix_is_plaintext() {
        let stored = Password::new("$argon2id$garbage");
        assert!(verify_password("$argon2id$garbage", &stored));
        assert!(!verify_password("x", &stored));
    }

    #[test]
    fn test_plaintext_password_with_hash_prefix_logs_in() {
        let store = MemoryStore::new();
        let config = StorefrontConfig::default();
        let auth = AuthService::new(&store, &config);

        let signed_in = auth
            .signup("Ana", "a@x.com", "$argon2pw", "$argon2pw", None)
            .unwrap();
        assert_eq!(signed_in.user.password.expose(), "$argon2pw");
        auth.logout().unwrap();

        let again = auth.login("a@x.com", "$argon2pw", None).unwrap();
        assert_eq!(again.user, signed_in.user);
        assert!(matches!(
            auth.login("a@x.com", "$argon2", None),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
