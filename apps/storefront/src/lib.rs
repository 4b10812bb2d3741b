//! # Storefront Library
//!
//! Session state, commands and the terminal front end of the storefront.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── render.rs       ◄─── Plain-text output
//! ├── state/
//! │   ├── mod.rs      ◄─── Session + state type exports
//! │   ├── store.rs    ◄─── Observable Store<S>
//! │   ├── cart.rs     ◄─── Cart state + checkout
//! │   ├── search.rs   ◄─── Search filter state
//! │   ├── catalog.rs  ◄─── Fetched catalog + derived view
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog and add-product commands
//! │   ├── search.rs   ◄─── Filter commands
//! │   └── cart.rs     ◄─── Cart commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Start-up Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()        RUST_LOG or "info,storefront=debug"          │
//! │  2. ConfigState::load()   defaults → storefront.toml → STOREFRONT_*    │
//! │  3. FakeStoreClient::new  base URL + timeout from config               │
//! │  4. Session::new(config)  empty cart, empty filters, catalog Idle      │
//! │  5. dispatch the subcommand                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use anyhow::Context;
use serde::Serialize;
use storefront_api::FakeStoreClient;
use storefront_core::ProductDraft;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use state::{ConfigState, Session};

/// Runs one CLI invocation.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(path) => ConfigState::load(Some(path)).context("Failed to load configuration")?,
        None => ConfigState::load_or_default(None),
    };

    let client = FakeStoreClient::new(&config.client_config())
        .context("Failed to create catalog client")?;
    info!(base_url = %client.base_url(), "Storefront session started");

    let session = Session::new(config);
    let json = cli.json;

    match cli.command {
        Command::Products { search, category } => {
            let loaded = commands::load_products(&session.catalog, &client).await;
            if let Some(term) = search {
                commands::set_search_term(&session.search, &term);
            }
            if let Some(category) = category {
                commands::select_category(&session.search, &category);
            }

            let response =
                commands::browse_products(&session.catalog, &session.search, &session.config);
            output(json, &response, || render::catalog(&response))?;
            loaded?;
        }

        Command::Categories => {
            let categories = commands::load_categories(&session.catalog, &client).await?;
            output(json, &categories, || render::categories(&categories))?;
        }

        Command::Category { name } => {
            let products = commands::fetch_category_products(&client, &name).await?;
            let cards: Vec<_> = products
                .iter()
                .map(|p| commands::ProductCard::new(p, &session.config))
                .collect();
            output(json, &cards, || {
                cards.iter().map(render::product_card).collect::<Vec<_>>().join("\n")
            })?;
        }

        Command::Show { id } => {
            let product = commands::get_product(&session.catalog, &client, id).await?;
            output(json, &product, || {
                render::product_detail(&product, &session.config)
            })?;
        }

        Command::Buy { ids } => {
            session.cart.subscribe(|cart| {
                debug!(badge = cart.total_items(), "Cart updated");
            });

            commands::load_products(&session.catalog, &client).await?;
            for id in ids {
                commands::add_to_cart(&session.catalog, &session.cart, id)?;
            }

            let cart = commands::get_cart(&session.cart);
            if !json {
                print!("{}", render::cart(&cart, &session.config));
            }

            let receipt = commands::checkout(&session.cart)?;
            output(json, &receipt, || render::receipt(&receipt, &session.config))?;
        }

        Command::AddProduct(args) => {
            let draft = ProductDraft::from(args);
            let product = commands::submit_product(&session.config, &draft).await?;
            output(json, &product, || {
                format!(
                    "Product added successfully!\n\n{}",
                    render::product_detail(&product, &session.config)
                )
            })?;
        }
    }

    Ok(())
}

/// Prints `value` as pretty JSON, or the text from `text`.
fn output<T, F>(json: bool, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_api=trace` - Show trace for the API client only
/// - Default: INFO, DEBUG for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
