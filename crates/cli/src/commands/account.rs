//! Account and session commands.

use chill_house_storefront::Storefront;
use chill_house_storefront::navigation::redirect_param;
use chill_house_storefront::storage::KeyValueStore;

use super::CommandError;

/// Create an account and sign in.
///
/// `query` is the signup page's query string; a `redirect` parameter in it
/// picks the landing page.
pub fn signup<S: KeyValueStore>(
    site: &Storefront<S>,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    query: &str,
) -> Result<(), CommandError> {
    let signed_in = site.signup(name, email, password, confirm, redirect_param(query))?;

    tracing::info!(
        email = %signed_in.user.email,
        next = %signed_in.next,
        "Account created. Welcome, {}!",
        signed_in.user.display_name()
    );
    Ok(())
}

/// Sign in with email and password.
pub fn login<S: KeyValueStore>(
    site: &Storefront<S>,
    email: &str,
    password: &str,
    query: &str,
) -> Result<(), CommandError> {
    let signed_in = site.login(email, password, redirect_param(query))?;

    tracing::info!(
        email = %signed_in.user.email,
        next = %signed_in.next,
        "Signed in as {}",
        signed_in.user.display_name()
    );
    Ok(())
}

/// Sign out.
pub fn logout<S: KeyValueStore>(site: &Storefront<S>) -> Result<(), CommandError> {
    let next = site.logout()?;
    tracing::info!(next = %next, "Signed out");
    Ok(())
}

/// Show the header auth link for the current session.
pub fn whoami<S: KeyValueStore>(site: &Storefront<S>) -> Result<(), CommandError> {
    let nav = site.nav_state()?;
    tracing::info!(
        href = nav.href(),
        logout_visible = nav.shows_logout(),
        "{}",
        nav.label()
    );
    Ok(())
}

/// List registered accounts. Passwords are never printed.
pub fn users<S: KeyValueStore>(site: &Storefront<S>) -> Result<(), CommandError> {
    let users = site.list_users()?;
    if users.is_empty() {
        tracing::info!("No accounts registered");
        return Ok(());
    }

    for user in &users {
        tracing::info!(name = %user.name, points = user.points, "{}", user.email);
    }
    tracing::info!("{} account(s)", users.len());
    Ok(())
}
