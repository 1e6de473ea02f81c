//! Integration tests for the login gate, order submission and the thank-you
//! page data.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};

use chill_house_core::{Page, Price};
use chill_house_integration_tests::{TestContext, delivery_form, pickup_form};
use chill_house_storefront::AppError;
use chill_house_storefront::config::StorefrontConfig;
use chill_house_storefront::navigation::{Location, NextAction};
use chill_house_storefront::services::{OrderGate, OrderService};
use chill_house_storefront::storage::FileStore;

fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

fn sisig(ctx: &TestContext) -> chill_house_storefront::models::OrderDraft {
    ctx.site
        .capture_order_draft("Sizzling Sisig", Price::parse("₱250").unwrap())
}

// ============================================================================
// Login gate
// ============================================================================

#[test]
fn test_order_gate_blocks_anonymous_visitors() {
    let ctx = TestContext::new();

    let gate = ctx.site.require_login_for_order().unwrap();
    assert_eq!(
        gate,
        OrderGate::Blocked {
            login: Location::login_then(Page::Menu)
        }
    );
    if let OrderGate::Blocked { login } = gate {
        assert_eq!(login.href(), "login.html?redirect=menu.html");
    }
}

#[test]
fn test_order_gate_allows_signed_in_user() {
    let ctx = TestContext::new();
    let ana = ctx.site.signup("Ana", "a@x.com", "p1", "p1", None).unwrap();

    assert_eq!(
        ctx.site.require_login_for_order().unwrap(),
        OrderGate::Allowed(ana.user)
    );

    ctx.site.logout().unwrap();
    assert!(matches!(
        ctx.site.require_login_for_order().unwrap(),
        OrderGate::Blocked { .. }
    ));
}

// ============================================================================
// Drafts
// ============================================================================

#[test]
fn test_capture_draft_has_no_side_effects() {
    let ctx = TestContext::new();

    let draft = sisig(&ctx);
    assert_eq!(draft.name, "Sizzling Sisig");
    assert_eq!(draft.quantity, 1);
    assert_eq!(draft.price.to_string(), "₱250");
    assert!(!ctx.store_path().exists());
}

#[test]
fn test_card_without_price_is_free() {
    let draft = OrderService::<FileStore>::capture_from_card("Mystery Dish", None);
    assert_eq!(draft.price, Price::zero());
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_pickup_order_is_stored_for_thank_you_page() {
    let ctx = TestContext::new();

    let submitted = ctx.site.submit_order(&pickup_form(sisig(&ctx))).unwrap();
    assert_eq!(submitted.next, NextAction::redirect(Page::ThankYou));

    let stored = ctx.entry("lastOrder").unwrap();
    assert_eq!(stored["customerName"], "Ana Cruz");
    assert_eq!(stored["orderType"], "pickup");
    assert_eq!(stored["paymentMethod"], "cash");
    assert_eq!(stored["totalAmount"], "₱250");
    assert_eq!(stored["orderItems"][0]["name"], "Sizzling Sisig");
    assert_eq!(stored["orderId"], submitted.record.order_id.as_str());
    assert!(stored.get("deliveryAddress").is_none());

    assert_eq!(ctx.reopen().last_order().unwrap(), Some(submitted.record));
}

#[test]
fn test_delivery_order_carries_address() {
    let ctx = TestContext::new();

    let submitted = ctx.site.submit_order(&delivery_form(sisig(&ctx))).unwrap();
    let address = submitted.record.delivery_address.unwrap();
    assert_eq!(address.city, "Makati");
    assert_eq!(address.zip_code, "1210");

    let stored = ctx.entry("lastOrder").unwrap();
    assert_eq!(stored["deliveryAddress"]["street"], "12 Mabini St");
    assert_eq!(stored["deliveryAddress"]["zipCode"], "1210");
}

#[test]
fn test_delivery_without_address_is_rejected() {
    let ctx = TestContext::new();
    let form = chill_house_storefront::models::OrderForm {
        street_address: String::new(),
        barangay: String::new(),
        city: String::new(),
        zip_code: String::new(),
        ..delivery_form(sisig(&ctx))
    };

    let err = ctx.site.submit_order(&form).unwrap_err();
    assert!(matches!(err, AppError::Order(_)));
    let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, ["streetAddress", "barangay", "city", "zipCode"]);
    assert_eq!(ctx.entry("lastOrder"), None);
}

#[test]
fn test_pickup_ignores_address_fields() {
    let ctx = TestContext::new();
    let form = pickup_form(sisig(&ctx));
    assert!(form.street_address.is_empty());

    let submitted = ctx.site.submit_order(&form).unwrap();
    assert_eq!(submitted.record.delivery_address, None);
}

#[test]
fn test_missing_payment_method_is_rejected() {
    let ctx = TestContext::new();
    let form = chill_house_storefront::models::OrderForm {
        payment_method: None,
        ..pickup_form(sisig(&ctx))
    };

    let err = ctx.site.submit_order(&form).unwrap_err();
    assert_eq!(err.field_errors()[0].field, "paymentMethod");
    assert_eq!(err.next_action(), NextAction::Stay);
}

// ============================================================================
// Order numbers
// ============================================================================

#[test]
fn test_order_numbers_use_prefix_and_timestamp() {
    let ctx = TestContext::new();
    let orders = ctx.site.orders();
    let form = pickup_form(sisig(&ctx));

    let first = orders.submit_order_at(&form, at(1_731_234_567_890)).unwrap();
    let second = orders.submit_order_at(&form, at(1_731_234_567_891)).unwrap();

    assert_eq!(first.record.order_id.as_str(), "CHILL567890");
    assert_eq!(second.record.order_id.as_str(), "CHILL567891");
    assert_ne!(first.record.order_id, second.record.order_id);
    assert_eq!(ctx.site.last_order().unwrap(), Some(second.record));
}

#[test]
fn test_configured_order_prefix() {
    let config = StorefrontConfig {
        order_id_prefix: "CH".to_string(),
        ..StorefrontConfig::default()
    };
    let ctx = TestContext::with_config(config);

    let submitted = ctx.site.submit_order(&pickup_form(sisig(&ctx))).unwrap();
    assert!(submitted.record.order_id.has_prefix("CH"));
    assert_eq!(submitted.record.order_id.as_str().len(), "CH".len() + 6);
}
