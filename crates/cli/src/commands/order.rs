//! Order commands.

use clap::Args;

use chill_house_storefront::Storefront;
use chill_house_storefront::models::OrderForm;
use chill_house_storefront::services::{OrderGate, OrderService};
use chill_house_storefront::storage::KeyValueStore;

use super::CommandError;

/// Fields of the order modal.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Dish name, as on the menu card
    #[arg(long)]
    item: String,

    /// Price text from the menu card, e.g. "₱250"
    #[arg(long)]
    price: Option<String>,

    /// Number of portions
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Customer name (default: signed-in user's name)
    #[arg(long)]
    name: Option<String>,

    /// Contact number
    #[arg(long, default_value = "")]
    phone: String,

    /// Customer email (default: signed-in user's email)
    #[arg(long)]
    email: Option<String>,

    /// `delivery`, `pickup` or `dine-in`
    #[arg(long, default_value = "")]
    order_type: String,

    /// `cash`, `gcash` or `card`
    #[arg(long)]
    payment: Option<String>,

    /// Special instructions for the kitchen
    #[arg(long, default_value = "")]
    instructions: String,

    /// Street address (delivery only)
    #[arg(long, default_value = "")]
    street: String,

    /// Barangay (delivery only)
    #[arg(long, default_value = "")]
    barangay: String,

    /// City (delivery only)
    #[arg(long, default_value = "")]
    city: String,

    /// ZIP code (delivery only)
    #[arg(long, default_value = "")]
    zip: String,

    /// Landmark (delivery only, optional)
    #[arg(long, default_value = "")]
    landmark: String,
}

/// Place an order for one menu item.
///
/// Runs the sign-in check first, the way the menu's order buttons do.
pub fn place<S: KeyValueStore>(site: &Storefront<S>, args: OrderArgs) -> Result<(), CommandError> {
    let user = match site.require_login_for_order()? {
        OrderGate::Allowed(user) => user,
        OrderGate::Blocked { login } => return Err(CommandError::LoginRequired { login }),
    };

    if args.quantity == 0 {
        return Err(CommandError::InvalidQuantity);
    }

    let mut draft = OrderService::<S>::capture_from_card(&args.item, args.price.as_deref());
    draft.quantity = args.quantity;

    let form = OrderForm {
        customer_name: args
            .name
            .unwrap_or_else(|| user.display_name().to_string()),
        customer_phone: args.phone,
        customer_email: args.email.unwrap_or_else(|| user.email.to_string()),
        order_type: args.order_type,
        payment_method: args.payment,
        special_instructions: args.instructions,
        street_address: args.street,
        barangay: args.barangay,
        city: args.city,
        zip_code: args.zip,
        landmark: args.landmark,
        ..OrderForm::for_draft(draft)
    };

    let submitted = site.submit_order(&form)?;
    tracing::info!(
        order_id = %submitted.record.order_id,
        total = %submitted.record.total_amount,
        next = %submitted.next,
        "Order placed"
    );
    Ok(())
}

/// Show the most recently placed order.
pub fn last_order<S: KeyValueStore>(site: &Storefront<S>) -> Result<(), CommandError> {
    match site.last_order()? {
        Some(order) => {
            tracing::info!(order_id = %order.order_id, "Thank you for your order!");
            tracing::info!("{}", serde_json::to_string_pretty(&order)?);
        }
        None => tracing::info!("No order has been placed yet"),
    }
    Ok(())
}
