//! Business services layered over the repositories.

pub mod auth;
pub mod contact;
pub mod orders;

pub use auth::{AuthError, AuthService, OrderGate, SignedIn};
pub use contact::{ContactError, ContactReceipt};
pub use orders::{OrderError, OrderService, SubmittedOrder};
