//! # Search Filter
//!
//! The search term and category selection driving the catalog view.
//!
//! Both fields are plain text. An empty value means "no restriction", so the
//! default filter matches everything.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Current search/filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    /// Free text matched case-insensitively against product titles.
    pub search_term: String,

    /// Exact category name, empty for all categories.
    pub selected_category: String,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the search term. No trimming or validation.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces the selected category.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Category bar behavior: picking the selected category again clears
    /// the selection, picking any other one selects it.
    pub fn toggle_category(&mut self, category: &str) {
        if self.selected_category == category {
            self.selected_category.clear();
        } else {
            self.selected_category = category.to_string();
        }
    }

    /// Resets both fields to empty.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_category.clear();
    }

    /// True when either field restricts the catalog.
    pub fn is_filtering(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_category.is_empty()
    }
}
