//! User domain types.

use serde::{Deserialize, Serialize};

use chill_house_core::{Email, Password};

/// A registered customer (one entry of the user directory).
///
/// Serialized with the field names the site pages read from local storage.
/// The password is whatever signup stored: plaintext for the default
/// configuration, or an Argon2 PHC string when hashing is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name entered at signup.
    #[serde(default)]
    pub name: String,
    /// Unique, lower-cased email address.
    pub email: Email,
    /// Stored password.
    pub password: Password,
    /// Loyalty points. Always 0 at signup; nothing awards points yet.
    #[serde(default)]
    pub points: i64,
}

impl User {
    /// Create a freshly signed-up user with no points.
    #[must_use]
    pub const fn new(name: String, email: Email, password: Password) -> Self {
        Self {
            name,
            email,
            password,
            points: 0,
        }
    }

    /// Name shown in the header, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.email.as_str()
        } else {
            &self.name
        }
    }
}
