//! Current-session repository.

use super::{RepositoryError, keys, read_json, write_json};
use crate::models::User;
use crate::storage::KeyValueStore;

/// Repository for the signed-in identity under [`keys::CURRENT_USER`].
pub struct SessionRepository<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> SessionRepository<'a, S> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The signed-in user, or `None` if signed out or the value is malformed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be read.
    pub fn current(&self) -> Result<Option<User>, RepositoryError> {
        read_json(self.store, keys::CURRENT_USER)
    }

    /// Replace the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be written.
    pub fn set(&self, user: &User) -> Result<(), RepositoryError> {
        write_json(self.store, keys::CURRENT_USER, user)
    }

    /// Sign out. Clearing an empty session is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be written.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(keys::CURRENT_USER)?;
        Ok(())
    }
}
