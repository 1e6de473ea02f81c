//! Order domain types.
//!
//! An [`OrderDraft`] is captured when a menu card's "Order Now" button is
//! pressed and shown in the order modal. Submitting the modal's
//! [`OrderForm`] produces an [`OrderRecord`], which is persisted for the
//! thank-you page.

use serde::{Deserialize, Serialize};

use chill_house_core::{Email, OrderNumber, OrderType, PaymentMethod, Price};

/// A menu item selected for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Dish name from the card title.
    pub name: String,
    /// Unit price from the card.
    pub price: Price,
    /// Number of portions. Always 1 when captured from a card.
    pub quantity: u32,
}

impl OrderDraft {
    /// Capture a single portion of a dish.
    #[must_use]
    pub fn capture(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Raw values from the order modal.
///
/// Text inputs arrive as strings, blank when left empty. The payment method is
/// a radio group, so it is `None` when nothing is checked. The delivery
/// fields are only read for delivery orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub order_type: String,
    pub payment_method: Option<String>,
    pub special_instructions: String,
    pub street_address: String,
    pub barangay: String,
    pub city: String,
    pub zip_code: String,
    pub landmark: String,
    /// Items shown in the modal's order summary.
    pub items: Vec<OrderDraft>,
}

impl OrderForm {
    /// An empty form whose summary holds `draft`.
    #[must_use]
    pub fn for_draft(draft: OrderDraft) -> Self {
        Self {
            items: vec![draft],
            ..Self::default()
        }
    }

    /// Sum of all item lines.
    ///
    /// The currency of the first item is used; an empty summary totals zero.
    #[must_use]
    pub fn total(&self) -> Price {
        let Some(first) = self.items.first() else {
            return Price::zero();
        };
        let amount = self.items.iter().map(|item| item.line_total().amount).sum();
        Price::new(amount, first.price.currency_code)
    }
}

/// Where a delivery order goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub street: String,
    pub barangay: String,
    pub city: String,
    pub zip_code: String,
    /// Optional directions; empty when not given.
    #[serde(default)]
    pub landmark: String,
}

/// A submitted order, as stored under `lastOrder` for the thank-you page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Email,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub special_instructions: String,
    pub order_items: Vec<OrderDraft>,
    pub total_amount: Price,
    pub order_id: OrderNumber,
    /// Present only for delivery orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,
}
