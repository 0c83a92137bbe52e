//! # Validation Module
//!
//! Input validation used when building domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Runs                              │
//! │                                                                         │
//! │  Product::new / DiscountRule::new / CarrierProviderSettings::new        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  THIS MODULE: reject bad SKUs, prices, quantities                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Checkout::calculate_price only ever sees valid values                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_sku, validate_quantity};
//!
//! assert!(validate_sku("COKE-330").is_ok());
//! assert!(validate_sku("discount:A").is_err());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest SKU accepted for a catalog product.
pub const MAX_SKU_LENGTH: usize = 50;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog SKU.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_SKU_LENGTH`] characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// The character rule keeps the `:` marker free for synthetic basket lines
/// (see [`crate::DISCOUNT_SKU_PREFIX`]), so a real SKU can never collide
/// with a discount or carrier bag line.
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    validate_required("sku", sku)?;

    if sku.chars().count() > MAX_SKU_LENGTH {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LENGTH,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Rejects empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product unit price. Products are never free.
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates a carrier bag price. Zero is allowed (free bags).
pub fn validate_bag_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount value, expressed as the amount to *remove*.
pub fn validate_discount_value(value: Money) -> ValidationResult<()> {
    if !value.is_negative() {
        return Err(ValidationError::MustBeNegative {
            field: "discount value".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity-like value (basket qty, trigger, bag capacity).
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    validate_positive("quantity", qty)
}

/// Same as [`validate_quantity`] with a caller-supplied field name.
pub fn validate_positive(field: &str, value: u32) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
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
    fn test_validate_sku() {
        assert!(validate_sku("A").is_ok());
        assert!(validate_sku("a").is_ok());
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("product_1").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_sku_rejects_reserved_marker() {
        let err = validate_sku("discount:A").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(validate_sku("carrier-bags:2").is_err());
    }

    #[test]
    fn test_validate_prices() {
        assert!(validate_unit_price(Money::from_cents(1)).is_ok());
        assert!(validate_unit_price(Money::zero()).is_err());
        assert!(validate_unit_price(Money::from_cents(-5)).is_err());

        assert!(validate_bag_price(Money::zero()).is_ok());
        assert!(validate_bag_price(Money::from_cents(-1)).is_err());

        assert!(validate_discount_value(Money::from_cents(-20)).is_ok());
        assert!(validate_discount_value(Money::zero()).is_err());
        assert!(validate_discount_value(Money::from_cents(20)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert_eq!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert!(validate_positive("max items per bag", 0).is_err());
    }
}
