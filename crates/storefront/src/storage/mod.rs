//! Key-value storage backends.
//!
//! The site keeps all of its state in a flat string-keyed store whose values
//! are JSON documents. Repositories in [`crate::db`] borrow a backend through
//! the [`KeyValueStore`] trait, so the same code runs against the on-disk
//! [`FileStore`] used by the CLI and the [`MemoryStore`] used in tests.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store contents could not be encoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A previous writer panicked while holding the store lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string-keyed store of string values.
///
/// Methods take `&self`; implementations synchronize internally so a single
/// backend can be shared by several repositories.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
