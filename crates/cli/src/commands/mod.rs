//! Command implementations.
//!
//! Each command runs one store operation and logs what the page would show.

use thiserror::Error;

use chill_house_storefront::AppError;
use chill_house_storefront::navigation::Location;

pub mod account;
pub mod contact;
pub mod order;

/// Errors that can end a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The store rejected the operation.
    #[error(transparent)]
    App(#[from] AppError),

    /// Ordering needs a signed-in user.
    #[error("Please log in to place an order ({login})")]
    LoginRequired {
        /// Where the site would send the customer.
        login: Location,
    },

    /// An order for zero portions.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    /// The last order could not be rendered.
    #[error("Failed to render order: {0}")]
    Render(#[from] serde_json::Error),
}
