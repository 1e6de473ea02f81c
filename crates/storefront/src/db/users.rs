//! User directory repository.
//!
//! The directory is one JSON array under [`keys::USERS`]; every write
//! replaces the whole array.

use serde_json::Value;

use chill_house_core::Email;

use super::{RepositoryError, keys, read_json, write_json};
use crate::models::User;
use crate::storage::KeyValueStore;

/// Repository for the user directory.
pub struct UserRepository<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> UserRepository<'a, S> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All registered users in signup order.
    ///
    /// An absent or malformed directory reads as empty. Individual records
    /// that do not decode are skipped with a warning but stay in the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be read.
    pub fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .records()?
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| decode_user(index, record))
            .collect())
    }

    /// Overwrite the whole directory.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be written.
    pub fn save_all(&self, users: &[User]) -> Result<(), RepositoryError> {
        write_json(self.store, keys::USERS, users)
    }

    /// Find users whose email matches, ignoring case.
    ///
    /// The directory normally holds at most one match; a hand-edited store may
    /// hold more, so all of them are returned in order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be read.
    pub fn find_by_email(&self, email: &Email) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|u| u.email.matches(email.as_str()))
            .collect())
    }

    /// Append a user to the directory.
    ///
    /// Existing records are written back as they were read, including ones
    /// that do not decode as a [`User`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered,
    /// in any record. Returns `RepositoryError::Storage` if the backend fails.
    pub fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut records = self.records()?;
        let taken = records.iter().any(|record| {
            record
                .get("email")
                .and_then(Value::as_str)
                .is_some_and(|email| user.email.matches(email))
        });
        if taken {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }

        records.push(serde_json::to_value(user)?);
        write_json(self.store, keys::USERS, &records)
    }

    /// The raw directory records.
    fn records(&self) -> Result<Vec<Value>, RepositoryError> {
        Ok(read_json(self.store, keys::USERS)?.unwrap_or_default())
    }
}

fn decode_user(index: usize, record: Value) -> Option<User> {
    match serde_json::from_value(record) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(index, error = %e, "Skipping malformed user record");
            None
        }
    }
}
