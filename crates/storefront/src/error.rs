//! Unified error handling.
//!
//! Provides a unified `AppError` type for everything the page layer can be
//! told about. Each variant maps to the alert text the site shows and the
//! navigation that follows it.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::models::FieldError;
use crate::navigation::NextAction;
use crate::services::{AuthError, ContactError, OrderError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order submission failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Contact form submission failed.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),
}

impl AppError {
    /// Whether this is a fault of the system rather than of the input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Repository(_)
                | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash)
                | Self::Order(OrderError::Repository(_))
        )
    }

    /// Text for the alert shown to the customer.
    ///
    /// Internal details are never exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_internal() {
            return "Something went wrong. Please try again.".to_string();
        }

        match self {
            Self::Auth(err) => match err {
                AuthError::PasswordMismatch => "Passwords do not match.".to_string(),
                AuthError::DuplicateEmail => {
                    "Email already registered. Please log in.".to_string()
                }
                AuthError::InvalidCredentials => "Invalid email or password.".to_string(),
                AuthError::InvalidEmail(_) => "Please enter a valid email address.".to_string(),
                AuthError::MissingName | AuthError::EmptyPassword => {
                    "Please fill out all required fields.".to_string()
                }
                _ => "Authentication error".to_string(),
            },
            Self::Order(_) | Self::Contact(_) => {
                "Please complete the highlighted fields.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Where the page should go after showing the error.
    #[must_use]
    pub const fn next_action(&self) -> NextAction {
        match self {
            Self::Auth(err) => err.next_action(),
            _ => NextAction::Stay,
        }
    }

    /// Inline field errors, if the failure was form validation.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Order(err) => err.field_errors(),
            Self::Contact(err) => err.field_errors(),
            _ => &[],
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
