//! Contact form handling.
//!
//! Messages are acknowledged but not stored or forwarded.

use thiserror::Error;
use tracing::instrument;

use chill_house_core::Email;

use crate::models::form::Validator;
use crate::models::{ContactForm, FieldError};

/// Confirmation shown after a successful submission.
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We'll get back to you within 24 hours.";

/// Errors that can occur when submitting the contact form.
#[derive(Debug, Error)]
pub enum ContactError {
    /// One or more fields are missing or invalid.
    #[error("contact form has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),
}

impl ContactError {
    /// Field errors to show inline.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
        }
    }
}

/// Acknowledgement of a contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    /// Text for the confirmation alert.
    pub message: &'static str,
    /// The page should clear the form.
    pub reset_form: bool,
}

/// Validate a contact message.
///
/// # Errors
///
/// Returns `ContactError::Validation` if name, email or message is blank, or
/// the email is malformed. The subject is optional.
#[instrument(skip_all)]
pub fn submit_contact(form: &ContactForm) -> Result<ContactReceipt, ContactError> {
    let mut v = Validator::new();
    v.require("name", &form.name)
        .require("email", &form.email)
        .require("message", &form.message);

    if !v.has_error("email") {
        if let Err(e) = Email::normalize(&form.email) {
            v.push(FieldError::new("email", e.to_string()));
        }
    }

    v.finish().map_err(ContactError::Validation)?;

    tracing::info!(subject = %form.subject.trim(), "Contact message received");

    Ok(ContactReceipt {
        message: CONTACT_SUCCESS_MESSAGE,
        reset_form: true,
    })
}
