//! # Command-Line Interface
//!
//! Argument definitions for the `storefront` binary.
//!
//! ```text
//! storefront products [--search S] [--category C]   browse the catalog
//! storefront categories                             list category names
//! storefront category <NAME>                        one category, server-side
//! storefront show <ID>                              product details
//! storefront buy <ID>...                            add to cart and check out
//! storefront add-product --title .. --price ..      simulate the form
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_core::{ProductDraft, ProductId};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse a product catalog and shop from the terminal")]
pub struct Cli {
    /// Config file (defaults to storefront.toml in the platform config dir)
    #[arg(long, global = true, env = "STOREFRONT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, optionally filtered
    Products {
        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List category names
    Categories,

    /// List one category's products as returned by the API
    Category { name: String },

    /// Show one product
    Show { id: ProductId },

    /// Add products to the cart by id, then check out
    Buy {
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },

    /// Validate and submit a new product (simulated)
    AddProduct(AddProductArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AddProductArgs {
    #[arg(long)]
    pub title: String,

    /// Price in dollars, e.g. 19.99
    #[arg(long)]
    pub price: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub category: String,

    /// Image URL
    #[arg(long)]
    pub image: String,
}

impl From<AddProductArgs> for ProductDraft {
    fn from(args: AddProductArgs) -> Self {
        ProductDraft {
            title: args.title,
            price: args.price,
            description: args.description,
            category: args.category,
            image: args.image,
        }
    }
}
