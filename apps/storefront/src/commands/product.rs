//! # Product Commands
//!
//! Catalog loading, browsing, product details and the add-product form.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Load Flow                                    │
//! │                                                                         │
//! │  Page mounts                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_products() ──► already Ready? ──yes──► return cached count        │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  ticket = products.begin()          (grid shows "Loading products...")  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  source.list_products().await       (no state lock held)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  products.finish(ticket, result)    (stale ticket → discarded)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  browse_products() derives the grid from products + filter              │
//! │                                                                         │
//! │  "Try again" button ──► reload_products() (always fetches)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use storefront_api::ProductSource;
use storefront_core::{
    text::truncate_text, validation::validate_product_draft, Money, Product, ProductDraft,
    ProductId, SearchFilter,
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, LoadFailure, SearchFilterState};

/// Card titles longer than this are cut with `...`.
pub const CARD_TITLE_MAX_CHARS: usize = 60;

/// Card descriptions longer than this are cut with `...`.
pub const CARD_DESCRIPTION_MAX_CHARS: usize = 100;

/// Product card DTO for the grid.
///
/// Carries the display strings alongside the raw values so every front end
/// renders prices and ratings the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub price: Money,
    pub price_label: String,
    pub filled_stars: u8,
    pub rating_label: String,
    pub review_count: u64,
}

impl ProductCard {
    pub fn new(product: &Product, config: &ConfigState) -> Self {
        ProductCard {
            id: product.id,
            title: truncate_text(&product.title, CARD_TITLE_MAX_CHARS),
            description: truncate_text(&product.description, CARD_DESCRIPTION_MAX_CHARS),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
            price_label: config.format_price(product.price),
            filled_stars: product.filled_stars(),
            rating_label: product.rating_label(),
            review_count: product.review_count(),
        }
    }
}

/// The product grid as the presentation layer receives it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub cards: Vec<ProductCard>,
    /// Size of the unfiltered catalog.
    pub total: usize,
    pub loading: bool,
    /// Load failure message, shown with a "Try again" button.
    pub error: Option<String>,
    /// Placeholder text when nothing is shown.
    pub empty_message: Option<String>,
    pub filters: SearchFilter,
}

// =============================================================================
// Catalog Loading
// =============================================================================

/// Loads the product list once per session.
///
/// Returns the number of products in the catalog. A catalog that is already
/// loaded is not fetched again; use [`reload_products`] for that.
pub async fn load_products<S: ProductSource>(
    catalog: &CatalogState,
    source: &S,
) -> Result<usize, ApiError> {
    if let Some(products) = catalog.products().data() {
        debug!(count = products.len(), "load_products: using cached catalog");
        return Ok(products.len());
    }
    fetch_products(catalog, source).await
}

/// Fetches the product list again, replacing whatever is loaded.
pub async fn reload_products<S: ProductSource>(
    catalog: &CatalogState,
    source: &S,
) -> Result<usize, ApiError> {
    debug!("reload_products command");
    fetch_products(catalog, source).await
}

async fn fetch_products<S: ProductSource>(
    catalog: &CatalogState,
    source: &S,
) -> Result<usize, ApiError> {
    let ticket = catalog.products().begin();

    match source.list_products().await {
        Ok(products) => {
            let count = products.len();
            if catalog.products().finish(ticket, Ok(products)) {
                info!(count, "Products loaded");
            }
            Ok(count)
        }
        Err(err) => {
            catalog
                .products()
                .finish(ticket, Err(LoadFailure::from(&err)));
            Err(err.into())
        }
    }
}

/// Loads the category list once per session.
pub async fn load_categories<S: ProductSource>(
    catalog: &CatalogState,
    source: &S,
) -> Result<Vec<String>, ApiError> {
    if let Some(categories) = catalog.categories().data() {
        return Ok(categories.to_vec());
    }

    let ticket = catalog.categories().begin();
    match source.list_categories().await {
        Ok(categories) => {
            info!(count = categories.len(), "Categories loaded");
            catalog.categories().finish(ticket, Ok(categories.clone()));
            Ok(categories)
        }
        Err(err) => {
            catalog
                .categories()
                .finish(ticket, Err(LoadFailure::from(&err)));
            Err(err.into())
        }
    }
}

/// Asks the data source for one category's products, bypassing the
/// session catalog.
pub async fn fetch_category_products<S: ProductSource>(
    source: &S,
    category: &str,
) -> Result<Vec<Product>, ApiError> {
    debug!(category, "fetch_category_products command");
    Ok(source.list_products_in_category(category).await?)
}

// =============================================================================
// Browsing
// =============================================================================

/// Derives the product grid from the loaded catalog and the current filters.
pub fn browse_products(
    catalog: &CatalogState,
    search: &SearchFilterState,
    config: &ConfigState,
) -> CatalogResponse {
    let filters = search.filter();
    let view = catalog.view(&filters);

    let state = catalog.products().state();
    CatalogResponse {
        cards: view
            .products
            .iter()
            .map(|p| ProductCard::new(p, config))
            .collect(),
        total: view.total,
        loading: state.is_loading(),
        error: state.failure().map(|f| f.message.clone()),
        empty_message: view.empty.as_ref().map(|reason| reason.message()),
        filters,
    }
}

/// Product details for the modal.
///
/// Served from the loaded catalog when possible, otherwise requested from
/// the data source.
pub async fn get_product<S: ProductSource>(
    catalog: &CatalogState,
    source: &S,
    product_id: ProductId,
) -> Result<Product, ApiError> {
    debug!(product_id, "get_product command");

    if let Some(product) = catalog.find_product(product_id) {
        return Ok(product);
    }
    Ok(source.get_product(product_id).await?)
}

// =============================================================================
// Add Product Form
// =============================================================================

/// Validates the add-product form and simulates submitting it.
///
/// Nothing is sent anywhere and the catalog is not changed: the returned
/// product exists only for the confirmation message. Its id is the current
/// time in epoch milliseconds and it starts with a `0 / 0` rating.
///
/// ## Errors
/// `VALIDATION_ERROR` naming the first invalid field.
pub async fn submit_product(config: &ConfigState, draft: &ProductDraft) -> Result<Product, ApiError> {
    debug!(title = %draft.title, "submit_product command");

    let new_product = validate_product_draft(draft)?;

    tokio::time::sleep(config.mock_submit_delay()).await;

    let id = ProductId::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let product = new_product.into_product(id);

    info!(id = product.id, title = %product.title, "Product submitted");
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Rating;

    fn config() -> ConfigState {
        ConfigState::default()
    }

    #[test]
    fn test_product_card_display_fields() {
        let mut product = Product::new(
            3,
            "A".repeat(80),
            Money::from_cents(123456),
            "electronics",
        );
        product.description = "d".repeat(150);
        product.rating = Some(Rating {
            rate: 4.7,
            count: 12,
        });

        let card = ProductCard::new(&product, &config());

        assert_eq!(card.title.chars().count(), CARD_TITLE_MAX_CHARS + 3);
        assert!(card.title.ends_with("..."));
        assert_eq!(card.description.chars().count(), CARD_DESCRIPTION_MAX_CHARS + 3);
        assert_eq!(card.price_label, "$1,234.56");
        assert_eq!(card.filled_stars, 4);
        assert_eq!(card.rating_label, "4.7");
        assert_eq!(card.review_count, 12);
    }

    #[test]
    fn test_product_card_unrated() {
        let product = Product::new(1, "Hat", Money::from_cents(500), "accessories");
        let card = ProductCard::new(&product, &config());

        assert_eq!(card.filled_stars, 0);
        assert_eq!(card.rating_label, "N/A");
        assert_eq!(card.review_count, 0);
    }

    #[test]
    fn test_browse_before_load() {
        let catalog = CatalogState::new();
        let search = SearchFilterState::new();

        let response = browse_products(&catalog, &search, &config());

        assert!(response.loading);
        assert!(response.cards.is_empty());
        assert!(response.error.is_none());
        assert_eq!(response.empty_message.as_deref(), Some("Loading products..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_product_builds_new_product() {
        let draft = ProductDraft {
            title: "Canvas Tote".into(),
            price: "24.50".into(),
            description: "A sturdy everyday tote bag.".into(),
            category: "women's clothing".into(),
            image: "https://example.com/tote.png".into(),
        };

        let product = submit_product(&config(), &draft).await.unwrap();

        assert!(product.id > 0);
        assert_eq!(product.price, Money::from_cents(2450));
        assert_eq!(product.rating_label(), "N/A");
        assert_eq!(product.review_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_product_rejects_invalid_draft() {
        let draft = ProductDraft {
            title: "Hi".into(),
            ..ProductDraft::default()
        };

        let err = submit_product(&config(), &draft).await.unwrap_err();

        assert_eq!(err.field.as_deref(), Some("title"));
    }
}
