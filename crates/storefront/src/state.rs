//! The store as the pages see it.
//!
//! [`Storefront`] owns a storage backend and the configuration, and exposes
//! every operation the site's pages trigger. Each call is synchronous and
//! returns the data to render plus, where relevant, the [`NextAction`] to
//! perform.

use chill_house_core::{Page, Price};

use crate::config::StorefrontConfig;
use crate::db::{SessionRepository, UserRepository};
use crate::error::Result;
use crate::models::{ContactForm, OrderDraft, OrderForm, OrderRecord, User};
use crate::navigation::{NavState, NextAction};
use crate::services::{
    AuthService, ContactReceipt, OrderGate, OrderService, SignedIn, SubmittedOrder,
    contact::submit_contact,
};
use crate::storage::{FileStore, KeyValueStore};

/// Session & order store over a storage backend.
#[derive(Debug)]
pub struct Storefront<S> {
    store: S,
    config: StorefrontConfig,
}

impl Storefront<FileStore> {
    /// Open the file-backed store named by `config.store_path`.
    #[must_use]
    pub fn open(config: StorefrontConfig) -> Self {
        let store = FileStore::open(config.store_path.clone());
        Self::new(store, config)
    }
}

impl<S: KeyValueStore> Storefront<S> {
    /// Create a storefront over any backend.
    #[must_use]
    pub const fn new(store: S, config: StorefrontConfig) -> Self {
        Self { store, config }
    }

    /// Get a reference to the storage backend.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Authentication service over this store.
    #[must_use]
    pub const fn auth(&self) -> AuthService<'_, S> {
        AuthService::new(&self.store, &self.config)
    }

    /// Order service over this store.
    #[must_use]
    pub const fn orders(&self) -> OrderService<'_, S> {
        OrderService::new(&self.store, &self.config)
    }

    // =========================================================================
    // Directory & Session
    // =========================================================================

    /// The persisted user directory; empty if absent or corrupt.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the backend cannot be read.
    pub fn list_users(&self) -> Result<Vec<User>> {
        Ok(UserRepository::new(&self.store).list()?)
    }

    /// Overwrite the persisted directory wholesale.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the backend cannot be written.
    pub fn save_users(&self, users: &[User]) -> Result<()> {
        Ok(UserRepository::new(&self.store).save_all(users)?)
    }

    /// The signed-in user; `None` if absent or corrupt.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the backend cannot be read.
    pub fn current_user(&self) -> Result<Option<User>> {
        Ok(SessionRepository::new(&self.store).current()?)
    }

    /// Overwrite the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the backend cannot be written.
    pub fn set_current_user(&self, user: &User) -> Result<()> {
        Ok(SessionRepository::new(&self.store).set(user)?)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// See [`AuthService::signup`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` on validation failure or a duplicate email.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
        redirect: Option<Page>,
    ) -> Result<SignedIn> {
        Ok(self.auth().signup(name, email, password, confirm, redirect)?)
    }

    /// See [`AuthService::login`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `InvalidCredentials` on a mismatch.
    pub fn login(&self, email: &str, password: &str, redirect: Option<Page>) -> Result<SignedIn> {
        Ok(self.auth().login(email, password, redirect)?)
    }

    /// Clear the session and reload.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if the backend cannot be written.
    pub fn logout(&self) -> Result<NextAction> {
        Ok(self.auth().logout()?)
    }

    /// Check the session before an order is started.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if the backend cannot be read.
    pub fn require_login_for_order(&self) -> Result<OrderGate> {
        Ok(self.auth().require_login_for_order()?)
    }

    /// Header state for the auth link.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if the backend cannot be read.
    pub fn nav_state(&self) -> Result<NavState> {
        Ok(self.auth().nav_state()?)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// One portion of a dish. No side effects.
    #[must_use]
    pub fn capture_order_draft(&self, name: &str, price: Price) -> OrderDraft {
        OrderService::<S>::capture_draft(name, price)
    }

    /// Validate and store an order; see [`OrderService::submit_order`].
    ///
    /// # Errors
    ///
    /// Returns `AppError::Order` with field errors if the form is incomplete.
    pub fn submit_order(&self, form: &OrderForm) -> Result<SubmittedOrder> {
        Ok(self.orders().submit_order(form)?)
    }

    /// The last submitted order, for the thank-you page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Order` if the backend cannot be read.
    pub fn last_order(&self) -> Result<Option<OrderRecord>> {
        Ok(self.orders().last_order()?)
    }

    // =========================================================================
    // Contact
    // =========================================================================

    /// Validate a contact message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Contact` with field errors if the form is incomplete.
    pub fn submit_contact(&self, form: &ContactForm) -> Result<ContactReceipt> {
        Ok(submit_contact(form)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::AuthError;
    use crate::storage::MemoryStore;

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::new(MemoryStore::new(), StorefrontConfig::default())
    }

    #[test]
    fn test_signup_login_logout_cycle() {
        let site = storefront();

        let signed_in = site.signup("Ana", "a@x.com", "p1", "p1", None).unwrap();
        assert_eq!(site.current_user().unwrap(), Some(signed_in.user.clone()));
        assert_eq!(site.list_users().unwrap().len(), 1);

        assert_eq!(site.logout().unwrap(), NextAction::Reload);
        assert_eq!(site.current_user().unwrap(), None);

        let again = site.login("A@X.COM", "p1", Some(Page::Menu)).unwrap();
        assert_eq!(again.user, signed_in.user);
        assert_eq!(again.next, NextAction::redirect(Page::Menu));
    }

    #[test]
    fn test_duplicate_signup_error_surface() {
        let site = storefront();
        site.signup("Ana", "a@x.com", "p1", "p1", None).unwrap();

        let err = site.signup("Ana", "A@x.com", "p1", "p1", None).unwrap_err();
        assert!(matches!(err, AppError::Auth(AuthError::DuplicateEmail)));
        assert_eq!(err.next_action(), NextAction::redirect(Page::Login));
        assert_eq!(site.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_save_users_and_set_current_user() {
        let site = storefront();
        let signed_in = site.signup("Ana", "a@x.com", "p1", "p1", None).unwrap();

        site.save_users(&[]).unwrap();
        assert!(site.list_users().unwrap().is_empty());

        site.logout().unwrap();
        site.set_current_user(&signed_in.user).unwrap();
        assert_eq!(site.current_user().unwrap(), Some(signed_in.user));
    }

    #[test]
    fn test_order_flow() {
        let site = storefront();
        assert!(matches!(
            site.require_login_for_order().unwrap(),
            OrderGate::Blocked { .. }
        ));

        site.signup("Ana", "a@x.com", "p1", "p1", None).unwrap();
        assert!(matches!(
            site.require_login_for_order().unwrap(),
            OrderGate::Allowed(_)
        ));

        let draft = site.capture_order_draft("Sisig", Price::parse("₱180").unwrap());
        let form = OrderForm {
            customer_name: "Ana".to_string(),
            customer_phone: "0917".to_string(),
            customer_email: "a@x.com".to_string(),
            order_type: "pickup".to_string(),
            payment_method: Some("gcash".to_string()),
            ..OrderForm::for_draft(draft)
        };
        let submitted = site.submit_order(&form).unwrap();
        assert!(submitted.record.order_id.has_prefix("CHILL"));
        assert_eq!(site.last_order().unwrap(), Some(submitted.record));
    }

    #[test]
    fn test_nav_state_and_contact() {
        let site = storefront();
        assert_eq!(site.nav_state().unwrap(), NavState::SignedOut);

        let receipt = site
            .submit_contact(&ContactForm {
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
            })
            .unwrap();
        assert!(receipt.reset_form);
        assert!(site.store().is_empty());
    }
}
