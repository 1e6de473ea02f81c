//! Order kinds selected in the order form.
//!
//! Both enums round-trip through the raw `<select>`/radio values so persisted
//! orders keep the strings the form submitted. Values the site does not know
//! are kept verbatim in `Other`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the customer receives the order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    /// Delivered to an address. Requires the delivery address fields.
    Delivery,
    /// Collected at the counter.
    Pickup,
    /// Eaten at the restaurant.
    DineIn,
    /// Any other value the form may carry.
    Other(String),
}

impl OrderType {
    /// Whether this order needs a delivery address.
    #[must_use]
    pub const fn requires_address(&self) -> bool {
        matches!(self, Self::Delivery)
    }

    /// Form value for this order type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
            Self::DineIn => "dine-in",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for OrderType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "delivery" => Self::Delivery,
            "pickup" => Self::Pickup,
            "dine-in" | "dinein" | "dine_in" => Self::DineIn,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderType> for String {
    fn from(value: OrderType) -> Self {
        value.as_str().to_string()
    }
}

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Cash,
    GCash,
    Card,
    Other(String),
}

impl PaymentMethod {
    /// Form value for this payment method.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::GCash => "gcash",
            Self::Card => "card",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cash" => Self::Cash,
            "gcash" => Self::GCash,
            "card" => Self::Card,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_from_form_value() {
        assert_eq!(OrderType::from("delivery".to_string()), OrderType::Delivery);
        assert_eq!(OrderType::from(" Pickup ".to_string()), OrderType::Pickup);
        assert_eq!(OrderType::from("dine-in".to_string()), OrderType::DineIn);
        assert_eq!(
            OrderType::from("catering".to_string()),
            OrderType::Other("catering".to_string())
        );
    }

    #[test]
    fn test_only_delivery_requires_address() {
        assert!(OrderType::Delivery.requires_address());
        assert!(!OrderType::Pickup.requires_address());
        assert!(!OrderType::DineIn.requires_address());
        assert!(!OrderType::Other("catering".to_string()).requires_address());
    }

    #[test]
    fn test_order_type_serde() {
        let json = serde_json::to_string(&OrderType::Delivery).unwrap();
        assert_eq!(json, "\"delivery\"");
        let parsed: OrderType = serde_json::from_str("\"pickup\"").unwrap();
        assert_eq!(parsed, OrderType::Pickup);
    }

    #[test]
    fn test_payment_method_round_trip_keeps_unknown_values() {
        let method = PaymentMethod::from("Maya".to_string());
        assert_eq!(method, PaymentMethod::Other("Maya".to_string()));
        assert_eq!(String::from(method), "Maya");
        assert_eq!(PaymentMethod::from("GCash".to_string()), PaymentMethod::GCash);
    }
}
