//! # Product Source
//!
//! The contract the session layer depends on. [`crate::FakeStoreClient`]
//! is the production implementation; tests plug in in-memory catalogs.

use std::future::Future;

use storefront_core::{Product, ProductId};

use crate::error::FetchError;

/// Read-only access to a product catalog.
///
/// Each call is a single asynchronous request: no retry, no caching, no
/// timeout beyond whatever the transport applies.
pub trait ProductSource: Send + Sync {
    /// Every product in the catalog, in catalog order.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;

    /// Distinct category names.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;

    /// A single product.
    fn get_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, FetchError>> + Send;

    /// Products of one category, in catalog order.
    fn list_products_in_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}
