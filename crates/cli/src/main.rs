//! Chill House CLI - drive the session and order store from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and sign in
//! chill-cli signup -n "Ana Cruz" -e ana@example.com -p secret -c secret
//!
//! # Sign in, returning to the menu afterwards
//! chill-cli login -e ana@example.com -p secret --query "?redirect=menu.html"
//!
//! # Order a dish for pickup
//! chill-cli order --item "Sizzling Sisig" --price "₱250" --phone 09171234567 \
//!     --order-type pickup --payment cash
//!
//! # Show the thank-you page data
//! chill-cli last-order
//! ```
//!
//! # Commands
//!
//! - `signup`, `login`, `logout`, `whoami`, `users` - Accounts and session
//! - `order`, `last-order` - Place an order and read it back
//! - `contact` - Send a contact message
//!
//! The store file defaults to `CHILL_STORE_PATH` and can be overridden with
//! `--store`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chill_house_storefront::config::StorefrontConfig;
use chill_house_storefront::{AppError, Storefront};

use crate::commands::CommandError;

mod commands;

#[derive(Parser)]
#[command(name = "chill-cli")]
#[command(author, version, about = "Chill House ordering tools")]
struct Cli {
    /// JSON file backing the store
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm: String,

        /// Query string of the signup page, e.g. `?redirect=menu.html`
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Sign in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Query string of the login page, e.g. `?redirect=menu.html`
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Sign out
    Logout,
    /// Show the header auth link for the current session
    Whoami,
    /// List registered accounts
    Users,
    /// Place an order for one menu item
    Order(commands::order::OrderArgs),
    /// Show the most recently placed order
    LastOrder,
    /// Send a contact message
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Your email address
        #[arg(short, long)]
        email: String,

        /// Subject line
        #[arg(short, long, default_value = "")]
        subject: String,

        /// Message body
        #[arg(short, long)]
        message: String,
    },
}

fn main() {
    // Load .env before reading RUST_LOG (ignore errors if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = StorefrontConfig::from_env().map_err(AppError::from)?;
    if let Some(path) = cli.store {
        config.store_path = path;
    }
    let site = Storefront::open(config);

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
            confirm,
            query,
        } => commands::account::signup(&site, &name, &email, &password, &confirm, &query)?,
        Commands::Login {
            email,
            password,
            query,
        } => commands::account::login(&site, &email, &password, &query)?,
        Commands::Logout => commands::account::logout(&site)?,
        Commands::Whoami => commands::account::whoami(&site)?,
        Commands::Users => commands::account::users(&site)?,
        Commands::Order(args) => commands::order::place(&site, args)?,
        Commands::LastOrder => commands::order::last_order(&site)?,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => commands::contact::send(&site, name, email, subject, message)?,
    }
    Ok(())
}

/// Log a failed command the way the site would alert it.
fn report(err: &CommandError) {
    let CommandError::App(app) = err else {
        tracing::error!("{err}");
        return;
    };

    if app.is_internal() {
        tracing::error!(error = %app, "Command failed");
    }
    tracing::error!("{}", app.user_message());
    for field in app.field_errors() {
        tracing::error!(field = field.field, "{}", field.message);
    }
}
