//! # Catalog Filtering
//!
//! Derives the displayed product list from the full catalog and the current
//! [`SearchFilter`].
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  include p  ⇔  (category == "" ∨ p.category == category)               │
//! │              ∧ lower(p.title) contains lower(term)                      │
//! │                                                                         │
//! │  • category match is exact (case-sensitive)                             │
//! │  • an empty term matches every title                                    │
//! │  • output keeps the catalog's order; no sorting, no paging              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::search::SearchFilter;
use crate::types::Product;

/// Returns true when `product` passes both the category and the search term.
pub fn matches_filter(product: &Product, filter: &SearchFilter) -> bool {
    let matches_category =
        filter.selected_category.is_empty() || product.category == filter.selected_category;

    matches_category && title_contains(&product.title, &filter.search_term)
}

/// Filters a catalog, preserving its order.
///
/// ```rust
/// use storefront_core::{filter_products, Money, Product, SearchFilter};
///
/// let products = vec![
///     Product::new(1, "Red Shirt", Money::from_cents(1500), "men's clothing"),
///     Product::new(2, "Blue Hat", Money::from_cents(900), "accessories"),
/// ];
///
/// let mut filter = SearchFilter::new();
/// filter.set_search_term("RED");
///
/// let shown = filter_products(&products, &filter);
/// assert_eq!(shown.len(), 1);
/// assert_eq!(shown[0].title, "Red Shirt");
/// ```
pub fn filter_products(products: &[Product], filter: &SearchFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches_filter(p, filter))
        .cloned()
        .collect()
}

/// Shown when the catalog itself is empty.
pub const NO_PRODUCTS_MESSAGE: &str = "No products available at the moment";

/// Shown when filters hide every product.
pub const NO_MATCHES_MESSAGE: &str = "Try adjusting your search or filter criteria";

/// Message shown when the filtered list is empty.
pub fn empty_message(filter: &SearchFilter) -> &'static str {
    if filter.is_filtering() {
        NO_MATCHES_MESSAGE
    } else {
        NO_PRODUCTS_MESSAGE
    }
}

fn title_contains(title: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shirt", Money::from_cents(1500), "men's clothing"),
            Product::new(2, "Blue Hat", Money::from_cents(900), "accessories"),
        ]
    }

    fn filter(term: &str, category: &str) -> SearchFilter {
        SearchFilter {
            search_term: term.to_string(),
            selected_category: category.to_string(),
        }
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        for term in ["red", "RED", "Red", "rEd"] {
            let shown = filter_products(&catalog(), &filter(term, ""));
            assert_eq!(titles(&shown), vec!["Red Shirt"], "term {term:?}");
        }
    }

    #[test]
    fn test_category_only() {
        let shown = filter_products(&catalog(), &filter("", "accessories"));
        assert_eq!(titles(&shown), vec!["Blue Hat"]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let shown = filter_products(&catalog(), &filter("", "Accessories"));
        assert!(shown.is_empty());
    }

    #[test]
    fn test_combined_without_match_is_empty() {
        let shown = filter_products(&catalog(), &filter("red", "accessories"));
        assert!(shown.is_empty());
    }

    #[test]
    fn test_substring_match_inside_title() {
        let shown = filter_products(&catalog(), &filter("hat", ""));
        assert_eq!(titles(&shown), vec!["Blue Hat"]);

        let shown = filter_products(&catalog(), &filter("t", ""));
        assert_eq!(titles(&shown), vec!["Red Shirt", "Blue Hat"]);
    }

    #[test]
    fn test_cleared_filter_returns_full_list_in_order() {
        let mut f = filter("red", "accessories");
        f.clear();

        let shown = filter_products(&catalog(), &f);
        assert_eq!(shown, catalog());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_products(&[], &filter("red", "")).is_empty());
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            empty_message(&filter("", "")),
            "No products available at the moment"
        );
        assert_eq!(
            empty_message(&filter("x", "")),
            "Try adjusting your search or filter criteria"
        );
    }
}
