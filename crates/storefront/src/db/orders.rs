//! Submitted-order hand-off repository.

use super::{RepositoryError, keys, read_json, write_json};
use crate::models::OrderRecord;
use crate::storage::KeyValueStore;

/// Repository for the order stored under [`keys::LAST_ORDER`].
///
/// Only the most recent order is kept; each submission overwrites it.
pub struct OrderRepository<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> OrderRepository<'a, S> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The last submitted order, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be read.
    pub fn last(&self) -> Result<Option<OrderRecord>, RepositoryError> {
        read_json(self.store, keys::LAST_ORDER)
    }

    /// Replace the last submitted order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the backend cannot be written.
    pub fn save(&self, order: &OrderRecord) -> Result<(), RepositoryError> {
        write_json(self.store, keys::LAST_ORDER, order)
    }
}
