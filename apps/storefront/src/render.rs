//! Plain-text rendering of command responses for the terminal.

use std::fmt::Write;

use storefront_core::{text::truncate_text, Product, MAX_RATING_STARS};

use crate::commands::{CartResponse, CatalogResponse, ProductCard};
use crate::state::{CheckoutReceipt, ConfigState};

/// Cart line titles longer than this are cut with `...`.
const CART_TITLE_MAX_CHARS: usize = 50;

/// `★★★★☆` for four filled stars.
pub fn stars(filled: u8) -> String {
    let filled = filled.min(MAX_RATING_STARS);
    let mut out = "★".repeat(filled as usize);
    out.push_str(&"☆".repeat((MAX_RATING_STARS - filled) as usize));
    out
}

pub fn catalog(response: &CatalogResponse) -> String {
    let mut out = String::new();

    if let Some(ref error) = response.error {
        let _ = writeln!(out, "Error: {error}");
    }

    for card in &response.cards {
        out.push_str(&product_card(card));
        out.push('\n');
    }

    if let Some(ref message) = response.empty_message {
        let _ = writeln!(out, "{message}");
    } else {
        let _ = writeln!(
            out,
            "Showing {} of {} products",
            response.cards.len(),
            response.total
        );
    }
    out
}

pub fn product_card(card: &ProductCard) -> String {
    format!(
        "#{:<4} {}\n      {} | {} {} ({} reviews) | {}\n      {}\n",
        card.id,
        card.title,
        card.category.to_uppercase(),
        stars(card.filled_stars),
        card.rating_label,
        card.review_count,
        card.price_label,
        card.description,
    )
}

pub fn product_detail(product: &Product, config: &ConfigState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(out, "{}", product.category);
    let _ = writeln!(
        out,
        "{} {} ({} reviews)",
        stars(product.filled_stars()),
        product.rating_label(),
        product.review_count()
    );
    let _ = writeln!(out, "{}", config.format_price(product.price));
    if !product.description.is_empty() {
        let _ = writeln!(out, "\n{}", product.description);
    }
    if !product.image.is_empty() {
        let _ = writeln!(out, "\nImage: {}", product.image);
    }
    out
}

pub fn categories(categories: &[String]) -> String {
    let mut out = String::from("All Products\n");
    for category in categories {
        let _ = writeln!(out, "{category}");
    }
    out
}

pub fn cart(response: &CartResponse, config: &ConfigState) -> String {
    if response.items.is_empty() {
        return "Your cart is empty\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Shopping Cart ({} items)", response.totals.total_items);
    for item in &response.items {
        let _ = writeln!(
            out,
            "  {:<53} x{:<3} {:>12}",
            truncate_text(&item.product.title, CART_TITLE_MAX_CHARS),
            item.quantity,
            config.format_price(item.line_total())
        );
    }
    let _ = writeln!(
        out,
        "Total: {}",
        config.format_price(response.totals.total_price)
    );
    out
}

pub fn receipt(receipt: &CheckoutReceipt, config: &ConfigState) -> String {
    format!(
        "Checkout successful! Total: {}\nOrder {} ({} items) at {}\n",
        config.format_price(receipt.total_price),
        receipt.order_id,
        receipt.total_items,
        receipt.completed_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
