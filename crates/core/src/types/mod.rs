//! Core types for Chill House.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod ordering;
pub mod page;
pub mod password;
pub mod price;

pub use email::{Email, EmailError};
pub use id::OrderNumber;
pub use ordering::{OrderType, PaymentMethod};
pub use page::Page;
pub use password::Password;
pub use price::{CurrencyCode, Price, PriceError};
