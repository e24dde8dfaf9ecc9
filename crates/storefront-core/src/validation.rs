//! # Validation Module
//!
//! Input validation for cart commands.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command (apps/storefront)                                    │
//! │  └── Deserialization of ids and quantities                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── id non-empty                                                      │
//! │  └── quantity range                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartItems                                                    │
//! │  └── catalog membership, per-product and per-cart limits               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product identifier.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert!(validate_product_id("gd46g23h").is_ok());
/// assert!(validate_product_id("  ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a directly-set cart quantity and narrows it to `u32`.
///
/// ## Rules
/// ```text
///   qty < 0     → MustBePositive
///   qty = 0     → Ok(0)  (caller removes the entry)
///   1..=999     → Ok(qty)
///   qty > 999   → OutOfRange
/// ```
pub fn validate_set_quantity(qty: i64) -> ValidationResult<u32> {
    if qty < 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > i64::from(MAX_ITEM_QUANTITY) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    // In range 0..=999 after the checks above
    Ok(qty as u32)
}

/// Validates that one more distinct product fits into the cart.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("ek51j12k").is_ok());

        assert!(matches!(
            validate_product_id(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_id("ab cd"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_set_quantity() {
        assert_eq!(validate_set_quantity(0), Ok(0));
        assert_eq!(validate_set_quantity(1), Ok(1));
        assert_eq!(validate_set_quantity(999), Ok(999));

        assert!(matches!(
            validate_set_quantity(-1),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_set_quantity(1000),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }
}
