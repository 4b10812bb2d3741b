//! # Catalog State
//!
//! Fetched catalog data (products, categories) and the filtered view derived
//! from it.
//!
//! ## Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Resource Load Lifecycle                             │
//! │                                                                         │
//! │   Idle ──begin()──► Loading ──finish(ticket, Ok)───► Ready(Arc<T>)      │
//! │                       ▲    ╲                                            │
//! │                       │     ╲─finish(ticket, Err)──► Failed             │
//! │                       │                                 │               │
//! │                       └───────────begin() (retry)───────┘               │
//! │                                                                         │
//! │  Each begin() bumps the generation and hands out a LoadTicket.          │
//! │  finish() applies a result only when its ticket is still the newest:    │
//! │                                                                         │
//! │    begin() → t1 ┐                                                       │
//! │    begin() → t2 ┼─► finish(t2, ..) applied                              │
//! │                 └─► finish(t1, ..) discarded (stale), logged            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived View
//! [`CatalogState::view`] filters the loaded products with the current
//! [`SearchFilter`]. The last result is memoized on the identity of the
//! product list (`Arc::ptr_eq`) plus the filter, so re-rendering with
//! unchanged inputs returns the same `Arc` without re-filtering.

use std::fmt;
use std::sync::{Arc, Mutex};

use storefront_api::FetchError;
use storefront_core::{catalog, filter_products, Product, ProductId, SearchFilter};
use tracing::{debug, warn};

use super::store::{lock, Store, Subscription};

// =============================================================================
// Load State
// =============================================================================

/// Identifies one load attempt of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Why a resource failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub resource: String,
    pub message: String,
}

impl From<&FetchError> for LoadFailure {
    fn from(err: &FetchError) -> Self {
        LoadFailure {
            resource: err.resource().to_string(),
            message: err.to_string(),
        }
    }
}

/// Where a fetched resource currently stands.
pub enum LoadState<T> {
    /// Never requested.
    Idle,
    Loading,
    Ready(Arc<T>),
    Failed(LoadFailure),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

impl<T> Clone for LoadState<T> {
    fn clone(&self) -> Self {
        match self {
            LoadState::Idle => LoadState::Idle,
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(data) => LoadState::Ready(Arc::clone(data)),
            LoadState::Failed(failure) => LoadState::Failed(failure.clone()),
        }
    }
}

impl<T> fmt::Debug for LoadState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Idle => f.write_str("Idle"),
            LoadState::Loading => f.write_str("Loading"),
            LoadState::Ready(_) => f.write_str("Ready(..)"),
            LoadState::Failed(failure) => f.debug_tuple("Failed").field(failure).finish(),
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    state: LoadState<T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Slot {
            generation: self.generation,
            state: self.state.clone(),
        }
    }
}

/// One fetched resource with generation-tagged completion.
#[derive(Debug)]
pub struct Resource<T> {
    name: &'static str,
    store: Store<Slot<T>>,
}

impl<T> Resource<T> {
    pub fn new(name: &'static str) -> Self {
        Resource {
            name,
            store: Store::new(Slot {
                generation: 0,
                state: LoadState::Idle,
            }),
        }
    }

    /// Marks the resource as loading and returns the ticket the completion
    /// must present.
    pub fn begin(&self) -> LoadTicket {
        let ticket = self.store.update(|slot| {
            slot.generation += 1;
            slot.state = LoadState::Loading;
            LoadTicket(slot.generation)
        });
        debug!(resource = self.name, generation = ticket.0, "Load started");
        ticket
    }

    /// Applies a completed load. Returns false when a newer load has started
    /// since `ticket` was issued; the result is then dropped.
    pub fn finish(&self, ticket: LoadTicket, result: Result<T, LoadFailure>) -> bool {
        let next = match result {
            Ok(data) => LoadState::Ready(Arc::new(data)),
            Err(failure) => LoadState::Failed(failure),
        };

        let applied = self.store.try_update(|slot| {
            if slot.generation != ticket.0 {
                return None;
            }
            slot.state = next;
            Some(())
        });

        if applied.is_none() {
            warn!(
                resource = self.name,
                generation = ticket.0,
                "Discarding stale load result"
            );
            return false;
        }
        true
    }

    pub fn state(&self) -> LoadState<T> {
        self.store.read(|slot| slot.state.clone())
    }

    pub fn data(&self) -> Option<Arc<T>> {
        self.store.read(|slot| slot.state.data().cloned())
    }

    pub fn is_ready(&self) -> bool {
        self.store.read(|slot| matches!(slot.state, LoadState::Ready(_)))
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&LoadState<T>) + Send + Sync + 'static,
    {
        self.store.subscribe(move |slot| listener(&slot.state))
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.store.unsubscribe(subscription)
    }
}

// =============================================================================
// Catalog View
// =============================================================================

/// Why the product grid has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    Loading,
    Failed(LoadFailure),
    /// The catalog loaded but holds no products.
    NoProducts,
    /// Products exist but none pass the active filters.
    NoMatches,
}

impl EmptyReason {
    pub fn message(&self) -> String {
        match self {
            EmptyReason::Loading => "Loading products...".to_string(),
            EmptyReason::Failed(failure) => format!("{}. Please try again.", failure.message),
            EmptyReason::NoProducts => catalog::NO_PRODUCTS_MESSAGE.to_string(),
            EmptyReason::NoMatches => catalog::NO_MATCHES_MESSAGE.to_string(),
        }
    }
}

/// The product grid as derived from the catalog and the filter.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Products passing the filter, in catalog order.
    pub products: Arc<Vec<Product>>,
    /// Size of the unfiltered catalog (0 while not loaded).
    pub total: usize,
    pub empty: Option<EmptyReason>,
}

impl CatalogView {
    fn unavailable(reason: EmptyReason) -> Self {
        CatalogView {
            products: Arc::new(Vec::new()),
            total: 0,
            empty: Some(reason),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug)]
struct ViewMemo {
    source: Arc<Vec<Product>>,
    filter: SearchFilter,
    shown: Arc<Vec<Product>>,
}

// =============================================================================
// Catalog State
// =============================================================================

/// Session-owned catalog cache.
#[derive(Debug)]
pub struct CatalogState {
    products: Resource<Vec<Product>>,
    categories: Resource<Vec<String>>,
    memo: Mutex<Option<ViewMemo>>,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState {
            products: Resource::new("products"),
            categories: Resource::new("categories"),
            memo: Mutex::new(None),
        }
    }

    pub fn products(&self) -> &Resource<Vec<Product>> {
        &self.products
    }

    pub fn categories(&self) -> &Resource<Vec<String>> {
        &self.categories
    }

    /// Looks a product up in the loaded catalog.
    pub fn find_product(&self, id: ProductId) -> Option<Product> {
        self.products
            .data()
            .and_then(|products| products.iter().find(|p| p.id == id).cloned())
    }

    /// Derives the product grid for `filter`.
    pub fn view(&self, filter: &SearchFilter) -> CatalogView {
        let products = match self.products.state() {
            LoadState::Idle | LoadState::Loading => {
                return CatalogView::unavailable(EmptyReason::Loading)
            }
            LoadState::Failed(failure) => {
                return CatalogView::unavailable(EmptyReason::Failed(failure))
            }
            LoadState::Ready(products) => products,
        };

        let shown = self.filtered(&products, filter);
        let empty = if !shown.is_empty() {
            None
        } else if products.is_empty() {
            Some(EmptyReason::NoProducts)
        } else {
            Some(EmptyReason::NoMatches)
        };

        CatalogView {
            total: products.len(),
            products: shown,
            empty,
        }
    }

    fn filtered(&self, source: &Arc<Vec<Product>>, filter: &SearchFilter) -> Arc<Vec<Product>> {
        let mut memo = lock(&self.memo);
        if let Some(ref m) = *memo {
            if Arc::ptr_eq(&m.source, source) && m.filter == *filter {
                return Arc::clone(&m.shown);
            }
        }

        let shown = Arc::new(filter_products(source, filter));
        debug!(
            total = source.len(),
            shown = shown.len(),
            search_term = %filter.search_term,
            category = %filter.selected_category,
            "Catalog view recomputed"
        );
        *memo = Some(ViewMemo {
            source: Arc::clone(source),
            filter: filter.clone(),
            shown: Arc::clone(&shown),
        });
        shown
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use storefront_core::Money;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shirt", Money::from_cents(1500), "men's clothing"),
            Product::new(2, "Blue Hat", Money::from_cents(900), "accessories"),
        ]
    }

    fn loaded() -> CatalogState {
        let catalog = CatalogState::new();
        let ticket = catalog.products().begin();
        assert!(catalog.products().finish(ticket, Ok(sample())));
        catalog
    }

    fn status_error() -> LoadFailure {
        LoadFailure::from(&FetchError::Status {
            resource: "products".to_string(),
            status: 500,
        })
    }

    #[test]
    fn test_view_while_loading_is_empty() {
        let catalog = CatalogState::new();
        let view = catalog.view(&SearchFilter::default());
        assert!(view.is_empty());
        assert_eq!(view.empty, Some(EmptyReason::Loading));

        catalog.products().begin();
        assert_eq!(catalog.view(&SearchFilter::default()).empty, Some(EmptyReason::Loading));
    }

    #[test]
    fn test_view_filters_loaded_products() {
        let catalog = loaded();
        let mut filter = SearchFilter::default();
        filter.set_search_term("red");

        let view = catalog.view(&filter);
        assert_eq!(view.len(), 1);
        assert_eq!(view.products[0].title, "Red Shirt");
        assert_eq!(view.total, 2);
        assert!(view.empty.is_none());
    }

    #[test]
    fn test_view_no_matches() {
        let catalog = loaded();
        let mut filter = SearchFilter::default();
        filter.set_search_term("red");
        filter.set_selected_category("accessories");

        let view = catalog.view(&filter);
        assert!(view.is_empty());
        assert_eq!(view.empty, Some(EmptyReason::NoMatches));
        assert_eq!(
            view.empty.unwrap().message(),
            "Try adjusting your search or filter criteria"
        );
    }

    #[test]
    fn test_view_empty_catalog() {
        let catalog = CatalogState::new();
        let ticket = catalog.products().begin();
        catalog.products().finish(ticket, Ok(Vec::new()));

        let view = catalog.view(&SearchFilter::default());
        assert_eq!(view.empty, Some(EmptyReason::NoProducts));
        assert_eq!(
            view.empty.unwrap().message(),
            "No products available at the moment"
        );
    }

    #[test]
    fn test_view_failed() {
        let catalog = CatalogState::new();
        let ticket = catalog.products().begin();
        assert!(catalog.products().finish(ticket, Err(status_error())));

        let view = catalog.view(&SearchFilter::default());
        match view.empty {
            Some(EmptyReason::Failed(failure)) => {
                assert_eq!(failure.resource, "products");
                assert!(failure.message.contains("HTTP 500"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_view_is_memoized() {
        let catalog = loaded();
        let filter = SearchFilter::default();

        let first = catalog.view(&filter);
        let second = catalog.view(&filter);
        assert!(Arc::ptr_eq(&first.products, &second.products));

        let mut other = SearchFilter::default();
        other.set_search_term("hat");
        let third = catalog.view(&other);
        assert!(!Arc::ptr_eq(&first.products, &third.products));
    }

    #[test]
    fn test_reload_invalidates_memo() {
        let catalog = loaded();
        let filter = SearchFilter::default();
        let before = catalog.view(&filter);

        let ticket = catalog.products().begin();
        catalog.products().finish(ticket, Ok(sample()));
        let after = catalog.view(&filter);

        assert!(!Arc::ptr_eq(&before.products, &after.products));
        assert_eq!(*before.products, *after.products);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let catalog = CatalogState::new();
        let first = catalog.products().begin();
        let second = catalog.products().begin();

        assert!(catalog.products().finish(second, Ok(sample())));
        assert!(!catalog.products().finish(first, Err(status_error())));

        assert!(catalog.products().is_ready());
        assert_eq!(catalog.view(&SearchFilter::default()).len(), 2);
    }

    #[test]
    fn test_stale_completion_does_not_notify() {
        let catalog = CatalogState::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        catalog.products().subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let first = catalog.products().begin();
        let second = catalog.products().begin();
        catalog.products().finish(second, Ok(sample()));
        catalog.products().finish(first, Ok(Vec::new()));

        // two begins + one applied finish
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_find_product() {
        let catalog = CatalogState::new();
        assert!(catalog.find_product(1).is_none());

        let ticket = catalog.products().begin();
        catalog.products().finish(ticket, Ok(sample()));

        assert_eq!(catalog.find_product(2).unwrap().title, "Blue Hat");
        assert!(catalog.find_product(42).is_none());
    }
}
