//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CHILL_STORE_PATH` - JSON file backing the store (default: chill-house-store.json)
//! - `CHILL_DEFAULT_LANDING` - Page to land on after login/signup without a
//!   `redirect` parameter (default: index.html)
//! - `CHILL_ORDER_ID_PREFIX` - Order number prefix (default: CHILL)
//! - `CHILL_HASH_PASSWORDS` - Store new passwords as Argon2id hashes
//!   (default: false, passwords are stored as entered)

use std::path::PathBuf;

use thiserror::Error;

use chill_house_core::{OrderNumber, Page};

const DEFAULT_STORE_PATH: &str = "chill-house-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// File backing the key-value store
    pub store_path: PathBuf,
    /// Redirect target after login/signup when no `redirect` is given
    pub default_landing: Page,
    /// Prefix of generated order numbers
    pub order_id_prefix: String,
    /// Hash new signup passwords instead of storing plaintext
    pub hash_passwords: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            default_landing: Page::Index,
            order_id_prefix: OrderNumber::DEFAULT_PREFIX.to_string(),
            hash_passwords: false,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let store_path = lookup("CHILL_STORE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map_or(defaults.store_path, PathBuf::from);

        let default_landing = match lookup("CHILL_DEFAULT_LANDING") {
            Some(value) => value.trim().parse::<Page>().map_err(|e| {
                ConfigError::InvalidEnvVar("CHILL_DEFAULT_LANDING".to_string(), e)
            })?,
            None => defaults.default_landing,
        };

        let order_id_prefix = match lookup("CHILL_ORDER_ID_PREFIX") {
            Some(value) => validate_prefix(value.trim())?,
            None => defaults.order_id_prefix,
        };

        let hash_passwords = match lookup("CHILL_HASH_PASSWORDS") {
            Some(value) => parse_bool("CHILL_HASH_PASSWORDS", &value)?,
            None => defaults.hash_passwords,
        };

        Ok(Self {
            store_path,
            default_landing,
            order_id_prefix,
            hash_passwords,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Order number prefixes must be non-empty ASCII alphanumerics.
fn validate_prefix(value: &str) -> Result<String, ConfigError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidEnvVar(
            "CHILL_ORDER_ID_PREFIX".to_string(),
            format!("must be non-empty and alphanumeric (got {value:?})"),
        ));
    }
    Ok(value.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean (got {other:?})"),
        )),
    }
}
