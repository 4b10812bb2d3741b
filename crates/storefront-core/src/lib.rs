//! # storefront-core: Pure State Model for the Storefront
//!
//! This crate holds the storefront's domain logic as plain data types and
//! pure functions, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (CLI / web)                     │   │
//! │  │   Search Bar ──► Category Bar ──► Product Grid ──► Cart Panel   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (session + commands)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐           │   │
//! │  │   │  types  │  │  money  │  │  cart   │  │ catalog │           │   │
//! │  │   │ Product │  │  Money  │  │  Cart   │  │ filter  │           │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘           │   │
//! │  │   ┌─────────┐  ┌────────────┐  ┌────────┐                      │   │
//! │  │   │ search  │  │ validation │  │  text  │                      │   │
//! │  │   └─────────┘  └────────────┘  └────────┘                      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rating, CartLineItem, ProductDraft)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The shopping cart and its totals
//! - [`search`] - Search term and category selection
//! - [`catalog`] - Derived, filtered product view
//! - [`validation`] - Add-product form rules
//! - [`text`] - Display helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, Money, Product};
//!
//! let shirt = Product::new(1, "Red Shirt", Money::from_cents(1000), "men's clothing");
//!
//! let mut cart = Cart::new();
//! cart.add_item(&shirt);
//! cart.add_item(&shirt);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), Money::from_cents(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod search;
pub mod text;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::{filter_products, matches_filter};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use search::SearchFilter;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Categories the add-product form accepts.
///
/// The live catalog may report other categories; this list only constrains
/// products created through the form.
pub const PRODUCT_CATEGORIES: [&str; 4] = [
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

/// Highest star count a rating can display.
pub const MAX_RATING_STARS: u8 = 5;
