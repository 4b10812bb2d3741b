//! # Cart
//!
//! The shopping cart held for the length of a session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                 Cart Method             Effect               │
//! │  ─────────                 ───────────             ──────               │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_item() ───────────► push or qty += 1    │
//! │                                                                         │
//! │  +/- buttons ────────────► update_quantity() ────► qty = n (≤0 drops)  │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_item() ────────► retain(id != x)     │
//! │                                                                         │
//! │  Checkout ───────────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Badge / panel ──────────► total_items()/total_price() (read only)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total: absent ids are no-ops, nothing is validated.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartLineItem, Product, ProductId};

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product increases quantity)
/// - Every quantity is ≥ 1 (setting it to 0 or less removes the line)
/// - Line order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1. The existing line keeps the
    ///   title, price and every other field it was created with, even if
    ///   `product` carries different values now.
    /// - Product not in cart: appended as a new line with quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartLineItem::from_product(product));
    }

    /// Removes the line for `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id() != id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of the line for `id`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - Product not in cart: no-op
    ///
    /// Returns whether any line changed.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.items.iter_mut().find(|i| i.id() == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Looks up the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Returns the number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities (the cart badge number), saturating at `i64::MAX`.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, i| total.saturating_add(i.quantity))
    }

    /// Sum of `price × quantity` over every line.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
