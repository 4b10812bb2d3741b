//! # Validation Module
//!
//! Rules for the add-product form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Add Product Form                                   │
//! │                                                                         │
//! │  ProductDraft (raw text)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_title ──► validate_price ──► validate_description            │
//! │       ──► validate_category ──► validate_image_url                      │
//! │       │                                                                 │
//! │       ├── first failure ──► ValidationError (shown under the field)     │
//! │       │                                                                 │
//! │       └── all pass ──► NewProduct (price parsed to Money)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart and the catalog never validate; this form is the only place
//! product data is checked.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_price, validate_title};
//!
//! assert!(validate_title("Desk Lamp").is_ok());
//! assert!(validate_title("ab").is_err());
//! assert_eq!(validate_price("19.99").unwrap().cents(), 1999);
//! ```

use url::Url;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{NewProduct, ProductDraft};
use crate::PRODUCT_CATEGORIES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 500;

/// Extensions accepted in an image URL.
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

// =============================================================================
// Form Validation
// =============================================================================

/// Validates a complete draft, reporting the first failing field.
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<NewProduct> {
    validate_title(&draft.title)?;
    let price = validate_price(&draft.price)?;
    validate_description(&draft.description)?;
    validate_category(&draft.category)?;
    validate_image_url(&draft.image)?;

    Ok(NewProduct {
        title: draft.title.clone(),
        price,
        description: draft.description.clone(),
        category: draft.category.clone(),
        image: draft.image.clone(),
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Title: required, 3 to 100 characters.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_length("title", title, TITLE_MIN, TITLE_MAX)
}

/// Description: required, 10 to 500 characters.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_length("description", description, DESCRIPTION_MIN, DESCRIPTION_MAX)
}

/// Price: required, must parse as a finite number greater than zero.
///
/// Surrounding whitespace is ignored. Returns the price rounded to cents.
pub fn validate_price(price: &str) -> ValidationResult<Money> {
    let trimmed = price.trim();
    if price.is_empty() {
        return Err(required("price"));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(Money::from_decimal(value)),
        _ => Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        }),
    }
}

/// Category: required, one of [`PRODUCT_CATEGORIES`].
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.is_empty() {
        return Err(required("category"));
    }

    if !PRODUCT_CATEGORIES.contains(&category) {
        return Err(ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: PRODUCT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        });
    }

    Ok(())
}

/// Image URL: required, absolute URL, and either names an image file
/// (`.jpg`, `.jpeg`, `.png`, `.gif`, `.webp`, any case) or points at a
/// placeholder service.
pub fn validate_image_url(image: &str) -> ValidationResult<()> {
    if image.is_empty() {
        return Err(required("image"));
    }

    Url::parse(image).map_err(|_| ValidationError::InvalidFormat {
        field: "image".to_string(),
        reason: "please enter a valid URL".to_string(),
    })?;

    let lower = image.to_lowercase();
    let is_image = IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext));
    if !is_image && !image.contains("placeholder") {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "URL must be a valid image link".to_string(),
        });
    }

    Ok(())
}

fn validate_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();

    if len == 0 {
        return Err(required(field));
    }
    if len < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    if len > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Desk Lamp".to_string(),
            price: "25.99".to_string(),
            description: "An adjustable lamp for late nights.".to_string(),
            category: "electronics".to_string(),
            image: "https://example.com/images/lamp.PNG".to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let product = validate_product_draft(&valid_draft()).unwrap();
        assert_eq!(product.price, Money::from_cents(2599));
        assert_eq!(product.title, "Desk Lamp");
    }

    #[test]
    fn test_title_rules() {
        assert!(matches!(
            validate_title(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_title("ab"),
            Err(ValidationError::TooShort { min: 3, .. })
        ));
        assert!(validate_title("abc").is_ok());
        assert!(validate_title(&"a".repeat(100)).is_ok());
        assert!(matches!(
            validate_title(&"a".repeat(101)),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn test_price_rules() {
        assert!(matches!(
            validate_price(""),
            Err(ValidationError::Required { .. })
        ));
        for bad in ["0", "-4", "abc", "NaN", "inf", "   "] {
            assert!(
                matches!(validate_price(bad), Err(ValidationError::MustBePositive { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(validate_price(" 7.5 ").unwrap(), Money::from_cents(750));
        assert_eq!(validate_price("0.01").unwrap(), Money::from_cents(1));
    }

    #[test]
    fn test_description_rules() {
        assert!(validate_description("too short").is_err());
        assert!(validate_description("ten chars!").is_ok());
        assert!(validate_description(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_category_rules() {
        assert!(matches!(
            validate_category(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_category("toys"),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert!(validate_category("women's clothing").is_ok());
    }

    #[test]
    fn test_image_rules() {
        assert!(matches!(
            validate_image_url(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_image_url("not a url.png"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_image_url("https://example.com/page.html").is_err());
        assert!(validate_image_url("https://cdn.example.com/a.webp?size=2").is_ok());
        assert!(validate_image_url("https://via.placeholder.com/300").is_ok());
    }

    #[test]
    fn test_first_failing_field_reported() {
        let mut draft = valid_draft();
        draft.price = "free".to_string();
        draft.image = String::new();

        let err = validate_product_draft(&draft).unwrap_err();
        assert_eq!(err.field(), "price");
    }
}
