//! Contact form command.

use chill_house_storefront::Storefront;
use chill_house_storefront::models::ContactForm;
use chill_house_storefront::storage::KeyValueStore;

use super::CommandError;

/// Send a contact message.
pub fn send<S: KeyValueStore>(
    site: &Storefront<S>,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), CommandError> {
    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    let receipt = site.submit_contact(&form)?;
    tracing::info!("{}", receipt.message);
    Ok(())
}
