//! Chill House storefront library.
//!
//! Mock authentication, the signed-in session and the order hand-off for the
//! restaurant site, all kept in a small key-value store.
//!
//! # Modules
//!
//! - `storage` - Key-value backends (in-memory and JSON file)
//! - `db` - Typed repositories for the users, session and last-order keys
//! - `models` - Users, order forms and records, contact messages
//! - `services` - Signup, login, order submission and contact handling
//! - `navigation` - Pages, redirects and the header auth link
//! - `state` - The [`Storefront`](state::Storefront) facade used by pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod navigation;
pub mod services;
pub mod state;
pub mod storage;

pub use error::{AppError, Result};
pub use state::Storefront;
