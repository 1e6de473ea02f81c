//! Inline form validation results.

use core::fmt;

use serde::Serialize;

/// A single invalid form field.
///
/// The page layer marks the named input invalid and shows `message` next to
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name (the input's id on the page).
    pub field: &'static str,
    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// A required field was left blank.
    #[must_use]
    pub fn required(field: &'static str) -> Self {
        Self::new(field, "This field is required.")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects field errors while a form is checked.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record an error if `value` is blank.
    pub(crate) fn require(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::required(field));
        }
        self
    }

    pub(crate) fn push(&mut self, error: FieldError) -> &mut Self {
        self.errors.push(error);
        self
    }

    pub(crate) fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Finish validation, returning the collected errors if there are any.
    pub(crate) fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_flags_blank_values() {
        let mut v = Validator::new();
        v.require("a", "value").require("b", "   ").require("c", "");
        let errors = v.finish().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["b", "c"]);
    }

    #[test]
    fn test_finish_ok_without_errors() {
        let mut v = Validator::new();
        v.require("a", "x");
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_display() {
        let e = FieldError::required("city");
        assert_eq!(e.to_string(), "city: This field is required.");
    }
}
