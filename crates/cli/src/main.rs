//! Shelf CLI - Storefront simulator shell.
//!
//! # Usage
//!
//! ```bash
//! # Create data/catalog.json from the bundled sample
//! shelf seed
//!
//! # Browse
//! shelf products --category Shirts
//! shelf products --search tee
//! shelf categories
//!
//! # Fill the cart and check out
//! shelf cart add 3
//! shelf cart remove 3
//! shelf cart show
//! shelf checkout
//! shelf receipts
//! ```
//!
//! # Environment Variables
//!
//! - `SHELF_DATA_DIR` - Data directory (overridden by `--data-dir`)
//! - `SHELF_CATALOG_FILE`, `SHELF_CART_FILE`, `SHELF_RECEIPTS_FILE` - File names
//! - `RUST_LOG` - Log filter (default: `shelf_storefront=info,shelf_cli=info`)
//!
//! Views go to stdout; logs and user-facing errors go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf_core::ProductId;
use shelf_storefront::{ActionError, Session, Storage, StorefrontConfig};

mod commands;
mod render;

/// Exit code for user-facing errors such as an empty cart at checkout.
const EXIT_USER_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Shelf storefront simulator")]
struct Cli {
    /// Directory holding catalog.json, cart.json and receipts.json
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Only show this exact (case-sensitive) category
        #[arg(short, long)]
        category: Option<String>,

        /// Only show products whose name or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List product categories
    Categories,
    /// Show one product
    Product {
        /// Product ID
        id: ProductId,
    },
    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Buy everything in the cart and record a receipt
    Checkout,
    /// List past receipts
    Receipts,
    /// Write the sample catalog into the data directory
    Seed {
        /// Overwrite an existing catalog
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        id: ProductId,
    },
    /// Remove one unit of a product
    Remove {
        /// Product ID
        id: ProductId,
    },
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shelf_storefront=info,shelf_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if let Some(action) = e.downcast_ref::<ActionError>() {
            let _ = writeln!(std::io::stderr(), "{action}");
            std::process::exit(EXIT_USER_ERROR);
        }
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    let storage = Storage::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let open = || Session::open(&storage);

    match cli.command {
        Commands::Seed { force } => commands::seed::catalog(&storage, force, &mut out)?,
        Commands::Receipts => commands::receipts::list(&storage, &mut out)?,
        Commands::Products { category, search } => {
            commands::catalog::products(&open(), category, search, &mut out)?;
        }
        Commands::Categories => commands::catalog::categories(&open(), &mut out)?,
        Commands::Product { id } => commands::catalog::product(&open(), id, &mut out)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&open(), &mut out)?,
            CartAction::Add { id } => {
                commands::cart::add(&open(), &storage, id, &mut out)?;
            }
            CartAction::Remove { id } => {
                commands::cart::remove(&open(), &storage, id, &mut out)?;
            }
        },
        Commands::Checkout => {
            commands::cart::checkout(&open(), &storage, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
