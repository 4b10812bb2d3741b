//! # Search Commands
//!
//! Search box and category bar actions. Each returns the filter as it stands
//! after the change so the caller can re-render without a second read.

use storefront_core::SearchFilter;
use tracing::debug;

use crate::state::SearchFilterState;

/// Updates the search term (called on every keystroke).
pub fn set_search_term(search: &SearchFilterState, term: &str) -> SearchFilter {
    debug!(term, "set_search_term command");
    search.set_search_term(term);
    search.filter()
}

/// Category bar click: selects `category`, or returns to "All" when the
/// active category is clicked again. `""` always selects "All".
pub fn select_category(search: &SearchFilterState, category: &str) -> SearchFilter {
    debug!(category, "select_category command");
    if category.is_empty() {
        search.set_selected_category("");
    } else {
        search.toggle_category(category);
    }
    search.filter()
}

/// "Clear filters" button on the empty-results panel.
pub fn clear_filters(search: &SearchFilterState) -> SearchFilter {
    debug!("clear_filters command");
    search.clear_filters();
    search.filter()
}

pub fn get_filters(search: &SearchFilterState) -> SearchFilter {
    search.filter()
}
