//! # Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront CLI                                   │
//! │                                                                         │
//! │  main.rs ────► parse args, install logging, start the runtime           │
//! │                                                                         │
//! │  lib.rs ─────► load config, build the client, dispatch the command      │
//! │                                                                         │
//! │  commands/ ──► load_products, add_to_cart, checkout, submit_product     │
//! │                                                                         │
//! │  state/ ─────► CartState, SearchFilterState, CatalogState, ConfigState  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use storefront_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    storefront_lib::init_tracing();

    storefront_lib::run(cli).await
}
