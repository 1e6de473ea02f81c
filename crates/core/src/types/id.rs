//! Order numbers shown on the thank-you page.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of trailing timestamp digits kept in an order number.
const TIMESTAMP_DIGITS: u32 = 6;

/// A customer-facing order number such as `CHILL482913`.
///
/// Built from a fixed prefix and the six low-order digits of the submission
/// time in milliseconds since the Unix epoch (zero padded). Two orders placed
/// at different milliseconds get different numbers unless they are a
/// multiple of 1000 seconds apart.
///
/// # Example
///
/// ```rust
/// use chill_house_core::OrderNumber;
///
/// let number = OrderNumber::from_millis("CHILL", 1_700_000_123_456);
/// assert_eq!(number.as_str(), "CHILL123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Default prefix for order numbers.
    pub const DEFAULT_PREFIX: &'static str = "CHILL";

    /// Build an order number from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(prefix: &str, millis: i64) -> Self {
        let modulus = 10_i64.pow(TIMESTAMP_DIGITS);
        let low = millis.rem_euclid(modulus);
        Self(format!(
            "{prefix}{low:0width$}",
            width = TIMESTAMP_DIGITS as usize
        ))
    }

    /// Build an order number for a submission time.
    #[must_use]
    pub fn generate(prefix: &str, at: DateTime<Utc>) -> Self {
        Self::from_millis(prefix, at.timestamp_millis())
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this number carries the given prefix.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
