//! Chill House Core - Shared types library.
//!
//! This crate provides common types used across all Chill House components:
//! - `storefront` - Session, directory and order store behind the site pages
//! - `cli` - Command-line driver over a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, passwords, prices, order numbers,
//!   order kinds and site pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
