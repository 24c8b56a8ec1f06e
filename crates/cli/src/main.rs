//! TableTap CLI - run the ordering system against a local data directory.
//!
//! # Usage
//!
//! ```bash
//! # Initialize the data directory with the seed catalog
//! tabletap seed
//!
//! # Browse the menu
//! tabletap menu
//!
//! # Place and track an order
//! tabletap order place --table 5 --item PROD-001:2 --item PROD-006:3
//! tabletap order track
//!
//! # Work the kitchen board
//! tabletap admin login
//! tabletap admin orders
//! tabletap admin advance ORD-...
//! ```
//!
//! # Commands
//!
//! - `seed` - initialize the data directory with the default catalog
//! - `menu` - print the menu grouped by category
//! - `order place` / `order track` - the customer flow
//! - `admin ...` - catalog management and the fulfillment board

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use tabletap_core::OrderStatus;

mod commands;
mod config;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "tabletap")]
#[command(author, version, about = "TableTap restaurant ordering tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory with the seed catalog
    Seed,
    /// Print the menu grouped by category
    Menu,
    /// Customer ordering flow
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Catalog management and the fulfillment board
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Place an order from the command line
    Place {
        /// Serving table (falls back to TABLETAP_TABLE)
        #[arg(short, long)]
        table: Option<String>,

        /// Line items as PRODUCT-ID:QTY, repeatable
        #[arg(short, long = "item", value_name = "ID:QTY")]
        items: Vec<String>,

        /// Special instructions for the kitchen
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show the most recently placed order
    Track,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Sign in as admin
    Login,
    /// Sign out
    Logout,
    /// List orders on the board
    Orders {
        /// Include served orders
        #[arg(long)]
        all: bool,
    },
    /// Move an order to the next status
    Advance {
        /// Order id
        id: String,
    },
    /// Set an order's status directly
    SetStatus {
        /// Order id
        id: String,
        /// One of: Pending, Preparing, Cooking, Ready, Served
        status: OrderStatus,
    },
    /// Clear the whole order history
    ClearOrders,
    /// Add a menu category
    AddCategory {
        /// Category name (normalized to title case)
        name: String,
    },
    /// Flip a product's availability
    Toggle {
        /// Product id
        id: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Seed => commands::seed::run(&config)?,
        Commands::Menu => commands::menu::run(&config)?,
        Commands::Order { action } => match action {
            OrderAction::Place {
                table,
                items,
                notes,
            } => commands::order::place(&config, table, &items, notes)?,
            OrderAction::Track => commands::order::track(&config)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Login => commands::admin::login(&config)?,
            AdminAction::Logout => commands::admin::logout(&config)?,
            AdminAction::Orders { all } => commands::admin::orders(&config, all)?,
            AdminAction::Advance { id } => commands::admin::advance(&config, &id)?,
            AdminAction::SetStatus { id, status } => {
                commands::admin::set_status(&config, &id, status)?;
            }
            AdminAction::ClearOrders => commands::admin::clear_orders(&config)?,
            AdminAction::AddCategory { name } => commands::admin::add_category(&config, &name)?,
            AdminAction::Toggle { id } => commands::admin::toggle(&config, &id)?,
        },
    }

    Ok(())
}
