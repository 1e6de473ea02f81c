//! Authentication error types.

use thiserror::Error;

use chill_house_core::Page;

use crate::db::RepositoryError;
use crate::navigation::NextAction;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] chill_house_core::EmailError),

    /// Signup name left blank.
    #[error("name is required")]
    MissingName,

    /// Signup password left blank.
    #[error("password is required")]
    EmptyPassword,

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The email is already in the directory.
    #[error("email already registered")]
    DuplicateEmail,

    /// No directory entry matches both email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Repository/storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl AuthError {
    /// Where the page should go after showing this error.
    ///
    /// A duplicate signup sends the customer to the login page; every other
    /// failure keeps them on the form.
    #[must_use]
    pub const fn next_action(&self) -> NextAction {
        match self {
            Self::DuplicateEmail => NextAction::redirect(Page::Login),
            _ => NextAction::Stay,
        }
    }
}
