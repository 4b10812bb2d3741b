//! # Search Filter State
//!
//! The search box text and the selected category tab, shared by the header
//! search field, the category bar and the product grid.

use storefront_core::SearchFilter;
use tracing::debug;

use super::store::{Store, Subscription};

/// Observable search criteria owned by the session.
#[derive(Debug, Default)]
pub struct SearchFilterState {
    store: Store<SearchFilter>,
}

impl SearchFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search term. Any string is accepted, including empty.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        debug!(%term, "search: set_search_term");
        self.store.update(|f| f.set_search_term(term));
    }

    /// Replaces the selected category; `""` means all categories.
    pub fn set_selected_category(&self, category: impl Into<String>) {
        let category = category.into();
        debug!(%category, "search: set_selected_category");
        self.store.update(|f| f.set_selected_category(category));
    }

    /// Selects `category`, or clears the selection if it is already active.
    pub fn toggle_category(&self, category: &str) {
        debug!(category, "search: toggle_category");
        self.store.update(|f| f.toggle_category(category));
    }

    /// Resets both fields to empty.
    pub fn clear_filters(&self) {
        debug!("search: clear_filters");
        self.store.update(SearchFilter::clear);
    }

    pub fn filter(&self) -> SearchFilter {
        self.store.snapshot()
    }

    pub fn search_term(&self) -> String {
        self.store.read(|f| f.search_term.clone())
    }

    pub fn selected_category(&self) -> String {
        self.store.read(|f| f.selected_category.clone())
    }

    pub fn is_filtering(&self) -> bool {
        self.store.read(SearchFilter::is_filtering)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SearchFilter) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.store.unsubscribe(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_setters_and_clear() {
        let search = SearchFilterState::new();
        search.set_search_term("red");
        search.set_selected_category("men's clothing");

        assert_eq!(search.search_term(), "red");
        assert_eq!(search.selected_category(), "men's clothing");
        assert!(search.is_filtering());

        search.clear_filters();
        assert_eq!(search.filter(), SearchFilter::default());
        assert!(!search.is_filtering());
    }

    #[test]
    fn test_toggle_category_twice_clears() {
        let search = SearchFilterState::new();
        search.toggle_category("jewelery");
        assert_eq!(search.selected_category(), "jewelery");
        search.toggle_category("jewelery");
        assert_eq!(search.selected_category(), "");
    }

    #[test]
    fn test_subscribers_see_each_keystroke() {
        let search = SearchFilterState::new();
        let terms = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&terms);
        let sub = search.subscribe(move |f| sink.lock().unwrap().push(f.search_term.clone()));

        search.set_search_term("b");
        search.set_search_term("ba");
        search.unsubscribe(sub);
        search.set_search_term("bag");

        assert_eq!(*terms.lock().unwrap(), vec!["b".to_string(), "ba".to_string()]);
    }
}
