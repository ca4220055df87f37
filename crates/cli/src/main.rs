//! Shopdesk CLI - the admin dashboard as subcommands.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (password from SHOPDESK_PASSWORD or prompted on stdin)
//! shopdesk login admin@shop.example
//!
//! # Browse and manage the catalog
//! shopdesk products list --page 1
//! shopdesk products create --file new-product.json
//! shopdesk products toggle black-tee
//!
//! # Orders
//! shopdesk orders list --status pending
//! shopdesk orders set-status 42 shipped \
//!     --delivery-partner FastShip --tracking-number FS-123 \
//!     --expected-delivery 2024-06-01
//!
//! # Reports
//! shopdesk dashboard sales-report --period daily --export csv
//! shopdesk receipt 42
//! ```
//!
//! Every command talks to the backend configured via
//! `SHOPDESK_API_BASE_URL`; an expired session surfaces as a prompt to
//! run `shopdesk login` again.

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's output surface is stdout/stderr.
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use clap::{Parser, Subcommand};

use shopdesk_admin::auth::FileTokenStore;
use shopdesk_admin::{AdminClient, AdminConfig, ApiError};

mod commands;

use commands::{banners, categories, coupons, dashboard, orders, products, session, users};

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(author, version, about = "Shopdesk admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the token pair
    Login {
        /// Account email address
        email: String,

        /// Read the password from stdin instead of `SHOPDESK_PASSWORD`
        #[arg(long)]
        password_stdin: bool,
    },
    /// Drop the persisted token pair
    Logout,
    /// Manage products, variants and images
    Products {
        #[command(subcommand)]
        action: products::ProductAction,
    },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: categories::CategoryAction,
    },
    /// Manage coupons
    Coupons {
        #[command(subcommand)]
        action: coupons::CouponAction,
    },
    /// Manage storefront banners
    Banners {
        #[command(subcommand)]
        action: banners::BannerAction,
    },
    /// Browse orders and drive status transitions
    Orders {
        #[command(subcommand)]
        action: orders::OrderAction,
    },
    /// Manage platform users
    Users {
        #[command(subcommand)]
        action: users::UserAction,
    },
    /// Dashboard views and report export
    Dashboard {
        #[command(subcommand)]
        action: dashboard::DashboardAction,
    },
    /// Generate a PDF receipt for an order
    Receipt {
        /// Order ID
        order_id: i64,

        /// Output path (defaults to `Receipt_{orderNumber}.pdf`)
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // The toast counterpart: one line, then a non-zero exit.
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let store = FileTokenStore::new(config.token_path.clone());
    let client = AdminClient::new(&config, Box::new(store))?;

    let outcome = dispatch(cli, &client).await;

    // The browser hard-redirected to /login here; the CLI's equivalent
    // is pointing the operator at the login command.
    if let Err(e) = &outcome
        && is_session_expired(e.as_ref())
    {
        eprintln!("session expired, run `shopdesk login <email>`");
    }
    outcome
}

async fn dispatch(cli: Cli, client: &AdminClient) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login {
            email,
            password_stdin,
        } => session::login(client, &email, password_stdin).await,
        Commands::Logout => session::logout(client).await,
        Commands::Products { action } => products::run(client, action).await,
        Commands::Categories { action } => categories::run(client, action).await,
        Commands::Coupons { action } => coupons::run(client, action).await,
        Commands::Banners { action } => banners::run(client, action).await,
        Commands::Orders { action } => orders::run(client, action).await,
        Commands::Users { action } => users::run(client, action).await,
        Commands::Dashboard { action } => dashboard::run(client, action).await,
        Commands::Receipt { order_id, out } => dashboard::receipt(client, order_id, out).await,
    }
}

fn is_session_expired(e: &(dyn std::error::Error + 'static)) -> bool {
    e.downcast_ref::<ApiError>()
        .is_some_and(|api| matches!(api, ApiError::SessionExpired))
}
