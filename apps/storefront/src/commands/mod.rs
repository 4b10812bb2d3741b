//! # Commands Module
//!
//! Every UI action the storefront supports, as plain functions.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog loading, browsing, add-product form
//! ├── search.rs   ◄─── Search term and category selection
//! └── cart.rs     ◄─── Cart manipulation and checkout
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs the loaded catalog and the cart
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, product_id: ProductId)
//!
//! // Needs the catalog and a data source
//! async fn load_products<S: ProductSource>(catalog: &CatalogState, source: &S)
//! ```
//!
//! Fallible commands return `Result<T, ApiError>`; the rest cannot fail.

pub mod cart;
pub mod product;
pub mod search;

pub use cart::*;
pub use product::*;
pub use search::*;
