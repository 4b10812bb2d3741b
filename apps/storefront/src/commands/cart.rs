//! # Cart Commands
//!
//! Cart drawer actions: add, change quantity, remove, clear, checkout.

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartLineItem, CoreError, ProductId};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, CartTotals, CatalogState, CheckoutReceipt};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Drawer                                                            │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Shopping Cart                                     3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Mens Casual Premium Slim Fit T-Shirts   [-] 2 [+]   $44.60    │    │
/// │  │  Solid Gold Petite Micropave             [-] 1 [+]  $168.00    │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Total                                              $212.60    │    │
/// │  │                [ Checkout (3 items) ]                          │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by one
/// - Product not in cart: added as a new line with quantity 1
/// - The line keeps the title and price it was first added with
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the loaded catalog (including when the
/// catalog has not loaded yet).
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = catalog
        .find_product(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    cart.add_item(&product);
    Ok(get_cart(cart))
}

/// Sets a line's quantity. Zero or less removes the line; an id that is not
/// in the cart is ignored.
pub fn update_cart_item(cart: &CartState, product_id: ProductId, quantity: i64) -> CartResponse {
    debug!(product_id, quantity, "update_cart_item command");
    cart.update_quantity(product_id, quantity);
    get_cart(cart)
}

/// Removes a line. Removing an absent id is a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id, "remove_from_cart command");
    cart.remove_item(product_id);
    get_cart(cart)
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.clear_cart();
    get_cart(cart)
}

/// Simulated checkout: records the totals in a receipt and empties the cart.
///
/// ## Errors
/// `CART_ERROR` when the cart is empty; the cart is left untouched.
pub fn checkout(cart: &CartState) -> Result<CheckoutReceipt, ApiError> {
    debug!("checkout command");

    let receipt = cart.checkout().ok_or(CoreError::EmptyCart)?;

    info!(
        order_id = %receipt.order_id,
        total_items = receipt.total_items,
        total_cents = receipt.total_price.cents(),
        "Checkout completed"
    );
    Ok(receipt)
}
