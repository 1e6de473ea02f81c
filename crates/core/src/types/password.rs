//! Password type.
//!
//! Wraps a stored password (plaintext or an Argon2 PHC string) so it never
//! leaks through `Debug` output or tracing fields.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix shared by all Argon2 PHC strings.
const ARGON2_PHC_PREFIX: &str = "$argon2";

/// A password as held in the user directory.
///
/// Directory records persist the password as a plain JSON string, so the
/// value serializes transparently. Only `Debug` is redacted.
#[derive(Clone)]
pub struct Password(SecretString);

impl Password {
    /// Wrap a password value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Expose the raw value for comparison, hashing or persistence.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Whether the value looks like an Argon2 PHC hash rather than plaintext.
    ///
    /// Only the prefix is checked; a plaintext password may also match.
    #[must_use]
    pub fn is_hashed(&self) -> bool {
        self.expose().starts_with(ARGON2_PHC_PREFIX)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Password {}

impl Serialize for Password {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.expose())
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
