//! Order capture and submission.
//!
//! Orders are never sent anywhere: a submitted order is validated, numbered,
//! and stored under `lastOrder` for the thank-you page to display.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

use chill_house_core::{Email, OrderNumber, OrderType, Page, PaymentMethod, Price};

use crate::config::StorefrontConfig;
use crate::db::{OrderRepository, RepositoryError};
use crate::models::form::Validator;
use crate::models::{DeliveryAddress, FieldError, OrderDraft, OrderForm, OrderRecord};
use crate::navigation::NextAction;
use crate::storage::KeyValueStore;

/// Errors that can occur when submitting an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// One or more form fields are missing or invalid. Nothing was stored.
    #[error("order form has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Repository/storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

impl OrderError {
    /// Field errors to show inline, empty for storage failures.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            Self::Repository(_) => &[],
        }
    }
}

/// A stored order and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub record: OrderRecord,
    /// Always the thank-you page.
    pub next: NextAction,
}

/// Order service.
pub struct OrderService<'a, S: ?Sized> {
    orders: OrderRepository<'a, S>,
    config: &'a StorefrontConfig,
}

impl<'a, S: KeyValueStore + ?Sized> OrderService<'a, S> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(store: &'a S, config: &'a StorefrontConfig) -> Self {
        Self {
            orders: OrderRepository::new(store),
            config,
        }
    }

    /// Capture one portion of a dish. No side effects.
    #[must_use]
    pub fn capture_draft(name: &str, price: Price) -> OrderDraft {
        OrderDraft::capture(name.trim(), price)
    }

    /// Capture a draft from a menu card's title and price text.
    ///
    /// A card without a price element, or with price text that does not
    /// parse, is priced at zero.
    #[must_use]
    pub fn capture_from_card(title: &str, price_text: Option<&str>) -> OrderDraft {
        let price = match price_text.map(Price::parse) {
            Some(Ok(price)) => price,
            Some(Err(e)) => {
                tracing::warn!(dish = %title, error = %e, "Unreadable menu price, using zero");
                Price::zero()
            }
            None => Price::zero(),
        };
        Self::capture_draft(title, price)
    }

    /// Validate and store an order placed now.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` with every invalid field if the form is
    /// incomplete. Returns `OrderError::Repository` if the store fails.
    pub fn submit_order(&self, form: &OrderForm) -> Result<SubmittedOrder, OrderError> {
        self.submit_order_at(form, Utc::now())
    }

    /// Validate and store an order placed at `at`.
    ///
    /// The order number is derived from `at`. Delivery address fields are
    /// required only for delivery orders, and the address is only attached to
    /// delivery orders.
    ///
    /// # Errors
    ///
    /// Same as [`OrderService::submit_order`].
    #[instrument(skip_all, fields(order_type = %form.order_type, items = form.items.len()))]
    pub fn submit_order_at(
        &self,
        form: &OrderForm,
        at: DateTime<Utc>,
    ) -> Result<SubmittedOrder, OrderError> {
        let record = build_record(form, &self.config.order_id_prefix, at)
            .map_err(OrderError::Validation)?;

        self.orders.save(&record)?;

        tracing::info!(
            order_id = %record.order_id,
            total = %record.total_amount,
            "Order submitted"
        );

        Ok(SubmittedOrder {
            record,
            next: NextAction::redirect(Page::ThankYou),
        })
    }

    /// The order most recently submitted, for the thank-you page.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the store cannot be read.
    pub fn last_order(&self) -> Result<Option<OrderRecord>, OrderError> {
        Ok(self.orders.last()?)
    }
}

/// Check the form and assemble the record.
fn build_record(
    form: &OrderForm,
    prefix: &str,
    at: DateTime<Utc>,
) -> Result<OrderRecord, Vec<FieldError>> {
    let mut v = Validator::new();

    v.require("customerName", &form.customer_name)
        .require("customerPhone", &form.customer_phone)
        .require("customerEmail", &form.customer_email)
        .require("orderType", &form.order_type)
        .require("paymentMethod", form.payment_method.as_deref().unwrap_or(""));

    let email = Email::parse(form.customer_email.trim());
    if let Err(e) = &email {
        if !v.has_error("customerEmail") {
            v.push(FieldError::new("customerEmail", e.to_string()));
        }
    }

    if form.items.is_empty() {
        v.push(FieldError::new("orderItems", "Your order is empty."));
    }

    let order_type = OrderType::from(form.order_type.trim().to_string());
    if order_type.requires_address() {
        v.require("streetAddress", &form.street_address)
            .require("barangay", &form.barangay)
            .require("city", &form.city)
            .require("zipCode", &form.zip_code);
    }

    v.finish()?;

    // Validation passed, so the email parsed.
    let Ok(customer_email) = email else {
        return Err(vec![FieldError::required("customerEmail")]);
    };

    let delivery_address = order_type.requires_address().then(|| DeliveryAddress {
        street: form.street_address.trim().to_string(),
        barangay: form.barangay.trim().to_string(),
        city: form.city.trim().to_string(),
        zip_code: form.zip_code.trim().to_string(),
        landmark: form.landmark.trim().to_string(),
    });

    Ok(OrderRecord {
        customer_name: form.customer_name.trim().to_string(),
        customer_phone: form.customer_phone.trim().to_string(),
        customer_email,
        order_type,
        payment_method: PaymentMethod::from(
            form.payment_method.as_deref().unwrap_or("").trim().to_string(),
        ),
        special_instructions: form.special_instructions.trim().to_string(),
        order_items: form.items.clone(),
        total_amount: form.total(),
        order_id: OrderNumber::generate(prefix, at),
        delivery_address,
    })
}
