//! Integration tests for the Chill House store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p chill-house-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `session_flow` - Signup, login, logout and the header state
//! - `order_flow` - The login gate, order submission and the thank-you data
//!
//! Every test runs against a file-backed store in its own temporary
//! directory, so the JSON written to disk is exercised end to end.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use chill_house_storefront::Storefront;
use chill_house_storefront::config::StorefrontConfig;
use chill_house_storefront::models::{OrderDraft, OrderForm};
use chill_house_storefront::storage::FileStore;

/// A storefront over a store file in a fresh temporary directory.
pub struct TestContext {
    /// Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
    /// The storefront under test.
    pub site: Storefront<FileStore>,
}

impl TestContext {
    /// Context with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    /// Context with `config`; its store path is replaced by the temp file.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = StorefrontConfig {
            store_path: dir.path().join("store.json"),
            ..config
        };
        let site = Storefront::open(config);
        Self { dir, site }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.site.config().store_path.clone()
    }

    /// A second storefront over the same file, as after a page load.
    #[must_use]
    pub fn reopen(&self) -> Storefront<FileStore> {
        Storefront::open(self.site.config().clone())
    }

    /// The decoded value stored under `key`, if present.
    ///
    /// Values are kept as JSON text inside the file's top-level object.
    ///
    /// # Panics
    ///
    /// Panics if the file is not a JSON object of strings, or the entry is
    /// not valid JSON.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<Value> {
        let raw = match std::fs::read_to_string(self.store_path()) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => panic!("Failed to read store file: {e}"),
        };
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&raw).expect("Store file is not a JSON object of strings");
        entries
            .get(key)
            .map(|value| serde_json::from_str(value).expect("Store entry is not JSON"))
    }

    /// Replace the store contents with `entries`, each encoded as JSON text.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn seed(&self, entries: &[(&str, Value)]) {
        let entries: BTreeMap<&str, String> = entries
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();
        let raw = serde_json::to_string(&entries).expect("Failed to encode store");
        self.write_raw(&raw);
    }

    /// Overwrite the backing file with `contents` as-is.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, contents: &str) {
        std::fs::write(self.store_path(), contents).expect("Failed to write store file");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete pickup order for `draft`.
#[must_use]
pub fn pickup_form(draft: OrderDraft) -> OrderForm {
    OrderForm {
        customer_name: "Ana Cruz".to_string(),
        customer_phone: "09171234567".to_string(),
        customer_email: "ana@example.com".to_string(),
        order_type: "pickup".to_string(),
        payment_method: Some("cash".to_string()),
        ..OrderForm::for_draft(draft)
    }
}

/// A complete delivery order for `draft`.
#[must_use]
pub fn delivery_form(draft: OrderDraft) -> OrderForm {
    OrderForm {
        order_type: "delivery".to_string(),
        street_address: "12 Mabini St".to_string(),
        barangay: "Poblacion".to_string(),
        city: "Makati".to_string(),
        zip_code: "1210".to_string(),
        ..pickup_form(draft)
    }
}
