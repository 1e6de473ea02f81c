//! Type-safe price representation using decimal arithmetic.
//!
//! Menu cards render prices as text (`₱250`, `₱1,250.00`). [`Price::parse`]
//! reads that text back into a decimal amount and a currency, and `Display`
//! writes it out again in the same shape. Prices serialize as that display
//! string so persisted orders keep the text the customer saw.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Nothing left after removing the currency symbol.
    #[error("price cannot be empty")]
    Empty,
    /// The amount is not a decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Price {
    /// Amount in the currency's standard unit (pesos, not centavos).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the default currency.
    ///
    /// Used when a menu card has no price element.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::PHP)
    }

    /// Parse display text such as `₱1,250.00`.
    ///
    /// A leading currency symbol selects the currency; text without one is
    /// taken to be pesos. Thousands separators and surrounding whitespace are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if no amount is present, the amount is not a
    /// number, or it is negative.
    pub fn parse(text: &str) -> Result<Self, PriceError> {
        let text = text.trim();
        let (currency_code, rest) = CurrencyCode::strip_symbol(text);
        let digits: String = rest
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();

        if digits.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount =
            Decimal::from_str(&digits).map_err(|_| PriceError::InvalidAmount(digits.clone()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        Ok(Self::new(amount, currency_code))
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl TryFrom<String> for Price {
    type Error = PriceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    PHP,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PHP => "₱",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    fn strip_symbol(text: &str) -> (Self, &str) {
        for code in [Self::PHP, Self::USD, Self::EUR, Self::GBP] {
            if let Some(rest) = text.strip_prefix(code.symbol()) {
                return (code, rest);
            }
        }
        (Self::default(), text)
    }
}
