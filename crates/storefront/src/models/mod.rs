//! Domain models for the storefront.
//!
//! These are the records persisted in the key-value store and the raw form
//! inputs the page layer hands over.

pub mod contact;
pub mod form;
pub mod order;
pub mod user;

pub use contact::ContactForm;
pub use form::FieldError;
pub use order::{DeliveryAddress, OrderDraft, OrderForm, OrderRecord};
pub use user::User;
