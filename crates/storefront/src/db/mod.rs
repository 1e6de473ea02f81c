//! Repositories over the key-value store.
//!
//! # Keys
//!
//! Everything lives under three fixed keys, each holding one JSON document:
//!
//! - `users` - the user directory, an array of user records
//! - `currentUser` - the signed-in user record, absent when signed out
//! - `lastOrder` - the most recently submitted order
//!
//! # Malformed data
//!
//! A value that fails to parse is logged and read as absent. The next write
//! replaces it. Backend failures are still returned as errors.

pub mod orders;
pub mod session;
pub mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

pub use orders::OrderRepository;
pub use session::SessionRepository;
pub use users::UserRepository;

/// Fixed store keys.
pub mod keys {
    /// The user directory.
    pub const USERS: &str = "users";

    /// The signed-in user.
    pub const CURRENT_USER: &str = "currentUser";

    /// The order handed to the thank-you page.
    pub const LAST_ORDER: &str = "lastOrder";
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A record could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read and decode the JSON document under `key`.
///
/// Returns `None` when the key is unset, holds `null`, or does not decode as
/// `T`.
fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, RepositoryError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring malformed stored value");
            Ok(None)
        }
    }
}

/// Encode `value` as JSON and store it under `key`.
fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), RepositoryError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)?;
    Ok(())
}
