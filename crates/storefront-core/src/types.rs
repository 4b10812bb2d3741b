//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  CartLineItem   │   │  ProductDraft   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │◄──│  product (all   │   │  raw form text  │       │
//! │  │  title          │   │   fields)       │   │  title, price,  │       │
//! │  │  price (Money)  │   │  quantity ≥ 1   │   │  description,   │       │
//! │  │  category       │   └─────────────────┘   │  category, image│       │
//! │  │  rating?        │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Product` mirrors the JSON records served by the catalog API, so it
//! derives `Deserialize` directly against that shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::MAX_RATING_STARS;

/// Identifier assigned to a product by the catalog.
pub type ProductId = u64;

// =============================================================================
// Rating
// =============================================================================

/// Aggregate customer rating of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u64,
}

impl Rating {
    /// Number of filled stars: `floor(rate)` clamped to `0..=5`.
    pub fn filled_stars(&self) -> u8 {
        if self.rate.is_nan() || self.rate <= 0.0 {
            return 0;
        }
        (self.rate.floor() as u64).min(MAX_RATING_STARS as u64) as u8
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// Read-only to the state model: the cart copies it, the catalog view
/// filters it, nothing mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name; search matches against this field.
    pub title: String,

    /// Unit price. Decimal number on the wire, cents in memory.
    #[serde(with = "crate::money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub description: String,

    /// Category name, matched exactly by the category filter.
    pub category: String,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Creates a product with empty description, no image and no rating.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: None,
        }
    }

    /// Number of filled stars to draw (0 when unrated).
    pub fn filled_stars(&self) -> u8 {
        self.rating.map(|r| r.filled_stars()).unwrap_or(0)
    }

    /// Rating as shown next to the stars, `N/A` when unrated.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) if rating.rate > 0.0 => rating.rate.to_string(),
            _ => "N/A".to_string(),
        }
    }

    /// Number of reviews (0 when unrated).
    pub fn review_count(&self) -> u64 {
        self.rating.map(|r| r.count).unwrap_or(0)
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// A cart entry: a frozen copy of the product plus a quantity.
///
/// ## Invariant
/// `quantity >= 1`. The cart removes a line instead of storing a zero or
/// negative quantity.
///
/// The product fields are the ones captured when the line was created.
/// Adding the same product again only bumps the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: i64,
}

impl CartLineItem {
    /// Creates a line item holding one unit of `product`.
    pub fn from_product(product: &Product) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Raw, unvalidated input of the add-product form.
///
/// Every field is text, including `price`, because that is what the form
/// collects. [`crate::validation::validate_product_draft`] turns it into a
/// checked [`NewProduct`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// A draft that passed validation, with its price parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub price: Money,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl NewProduct {
    /// Builds the catalog record for this draft. Newly created products
    /// start with a `0.0 / 0` rating.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: Some(Rating {
                rate: 0.0,
                count: 0,
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
