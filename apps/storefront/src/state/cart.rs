//! # Cart State
//!
//! Session-owned shopping cart with change notification.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 Cart State Change     │
//! │  ─────────                ───────                 ─────────────────     │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► push or quantity+1   │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_item() ──► qty = n (≤0 removes) │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► items.remove(i)      │
//! │                                                                         │
//! │  Checkout ───────────────► checkout() ──────────► receipt, then clear  │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  Every write notifies subscribers (cart badge, cart page) once.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartLineItem, Money, Product, ProductId};
use tracing::debug;
use uuid::Uuid;

use super::store::{Store, Subscription};

/// Cart totals for display (badge count, summary panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub line_count: usize,
    /// Sum of quantities (the badge number).
    pub total_items: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Result of a simulated checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: Uuid,
    pub lines: Vec<CartLineItem>,
    pub total_items: i64,
    pub total_price: Money,
    pub completed_at: DateTime<Utc>,
}

impl CheckoutReceipt {
    fn from_cart(cart: &Cart) -> Self {
        CheckoutReceipt {
            order_id: Uuid::new_v4(),
            lines: cart.items().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            completed_at: Utc::now(),
        }
    }
}

/// Observable cart owned by the session.
#[derive(Debug, Default)]
pub struct CartState {
    store: Store<Cart>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`. A product already in the cart only has
    /// its quantity bumped; the stored title and price are kept.
    pub fn add_item(&self, product: &Product) {
        debug!(product_id = product.id, "cart: add_item");
        self.store.update(|cart| cart.add_item(product));
    }

    /// Removes a line. Returns false if the product was not in the cart.
    pub fn remove_item(&self, id: ProductId) -> bool {
        debug!(product_id = id, "cart: remove_item");
        self.store.update(|cart| cart.remove_item(id))
    }

    /// Sets a line's quantity; zero or negative removes it.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) -> bool {
        debug!(product_id = id, quantity, "cart: update_quantity");
        self.store.update(|cart| cart.update_quantity(id, quantity))
    }

    pub fn clear_cart(&self) {
        debug!("cart: clear");
        self.store.update(Cart::clear);
    }

    /// Captures the cart as a receipt and empties it.
    ///
    /// Returns `None` without touching the cart (or notifying) when the cart
    /// is empty.
    pub fn checkout(&self) -> Option<CheckoutReceipt> {
        let receipt = self.store.try_update(|cart| {
            if cart.is_empty() {
                return None;
            }
            let receipt = CheckoutReceipt::from_cart(cart);
            cart.clear();
            Some(receipt)
        })?;
        debug!(order_id = %receipt.order_id, total_items = receipt.total_items, "cart: checkout");
        Some(receipt)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn total_items(&self) -> i64 {
        self.store.read(Cart::total_items)
    }

    pub fn total_price(&self) -> Money {
        self.store.read(Cart::total_price)
    }

    pub fn totals(&self) -> CartTotals {
        self.store.read(|cart| CartTotals::from(cart))
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        self.store.read(|cart| cart.items().to_vec())
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.store.read(Cart::line_count)
    }

    pub fn is_empty(&self) -> bool {
        self.store.read(Cart::is_empty)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let response = cart_state.with_cart(|c| CartResponse::from(c));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        self.store.read(f)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Calls `listener` with the new cart after every cart mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Cart) + Send + Sync + 'static,
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
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn product(id: ProductId, cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_cents(cents), "electronics")
    }

    #[test]
    fn test_add_same_product_merges() {
        let cart = CartState::new();
        let p = product(1, 1000);

        cart.add_item(&p);
        cart.add_item(&p);
        cart.add_item(&p);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_price(), Money::from_cents(3000));
    }

    #[test]
    fn test_totals() {
        let cart = CartState::new();
        cart.add_item(&product(1, 1000));
        cart.add_item(&product(1, 1000));
        cart.add_item(&product(2, 500));

        let totals = cart.totals();
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price, Money::from_cents(2500));
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let cart = CartState::new();
        let p = product(1, 1000);
        cart.add_item(&p);
        cart.add_item(&p);

        assert!(cart.update_quantity(1, 0));
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_listener_fires_once_per_mutation() {
        let cart = CartState::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        cart.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cart.add_item(&product(1, 100));
        cart.update_quantity(1, 4);
        cart.remove_item(99);
        cart.clear_cart();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_listener_receives_badge_count() {
        let cart = CartState::new();
        let badges = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&badges);
        cart.subscribe(move |c| sink.lock().unwrap().push(c.total_items()));

        let p = product(7, 250);
        cart.add_item(&p);
        cart.add_item(&p);
        cart.remove_item(7);

        assert_eq!(*badges.lock().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_checkout_clears_and_returns_receipt() {
        let cart = CartState::new();
        cart.add_item(&product(1, 1000));
        cart.add_item(&product(1, 1000));
        cart.add_item(&product(2, 500));

        let receipt = cart.checkout().unwrap();

        assert_eq!(receipt.total_items, 3);
        assert_eq!(receipt.total_price, Money::from_cents(2500));
        assert_eq!(receipt.lines.len(), 2);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_is_silent() {
        let cart = CartState::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        cart.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(cart.checkout().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
