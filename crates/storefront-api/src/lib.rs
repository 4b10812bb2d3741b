//! # storefront-api: Catalog Data Source
//!
//! Fetches products and categories from the Fake Store REST API.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  Command (load_products)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-api (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌───────────────────────────┐  │   │
//! │  │   │  ProductSource     │◄───────│  FakeStoreClient          │  │   │
//! │  │   │  (trait, source.rs)│ impl   │  (reqwest, client.rs)     │  │   │
//! │  │   └────────────────────┘        └───────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  https://fakestoreapi.com                                              │
//! │    GET /products               GET /products/categories               │
//! │    GET /products/{id}          GET /products/category/{name}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_api::{ClientConfig, FakeStoreClient, ProductSource};
//!
//! let client = FakeStoreClient::new(&ClientConfig::default())?;
//! let products = client.list_products().await?;
//! ```

pub mod client;
pub mod error;
pub mod source;

pub use client::{ClientConfig, FakeStoreClient, DEFAULT_BASE_URL};
pub use error::{ClientError, FetchError};
pub use source::ProductSource;
