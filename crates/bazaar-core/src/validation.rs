//! # Validation Module
//!
//! Input validation utilities for Bazaar.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum + serde)                                │
//! │  ├── Body is JSON, fields have the right shape                         │
//! │  └── Failure → MALFORMED_REQUEST                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Business rules on individual values                               │
//! │  └── Failure → VALIDATION_ERROR                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Entity store (under the write lock)                          │
//! │  ├── Existence checks, stock checks, duplicate categories              │
//! │  └── Nothing mutates until every check passes                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Kettle").is_ok());
//! assert_eq!(validate_quantity(5).unwrap(), 5);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{BirthMonth, NewCoupon};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product or category name.
pub const MAX_NAME_LEN: usize = 200;

/// Highest accepted discount percent, in basis points.
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a product name, returning it trimmed.
///
/// ## Example
/// ```rust
/// use bazaar_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Kettle ").unwrap(), "Kettle");
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_name("name", name)
}

/// Validates a coupon category name, returning it trimmed.
pub fn validate_category_name(name: &str) -> ValidationResult<String> {
    validate_name("category", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ```text
/// place-order { quantity: 0 }
///       │
///       ▼
/// validate_quantity(0) ← THIS FUNCTION
///       │
///       └── qty <= 0? → "quantity must be positive", nothing mutated
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<u64> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(qty as u64)
}

/// Validates the initial stock of a new product. Zero is allowed.
pub fn validate_stock(stock: i64) -> ValidationResult<u64> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(stock as u64)
}

fn validate_non_negative(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a unit sale price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use bazaar_core::money::Money;
/// use bazaar_core::validation::validate_sale_price;
///
/// assert!(validate_sale_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_sale_price(Money::zero()).is_ok());
/// assert!(validate_sale_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_sale_price(price: Money) -> ValidationResult<()> {
    validate_non_negative("sale_price", price)
}

/// Validates a cart value sent by a client.
pub fn validate_cart_value(cart_value: Money) -> ValidationResult<()> {
    validate_non_negative("cart_value", cart_value)
}

/// Validates a wallet top-up amount.
pub fn validate_wallet_amount(amount: Money) -> ValidationResult<()> {
    validate_non_negative("amount", amount)
}

/// Validates a birth month number.
pub fn validate_birth_month(month: i64) -> ValidationResult<BirthMonth> {
    u32::try_from(month)
        .ok()
        .and_then(BirthMonth::new)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "birth_month".to_string(),
            min: 1,
            max: 12,
        })
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a coupon before it is stored.
///
/// ## Rules
/// - Category label is present
/// - Window bounds and cap are non-negative
/// - `min_cart_value <= max_cart_value`
/// - Discount percent is at most 100
pub fn validate_coupon(coupon: &NewCoupon) -> ValidationResult<()> {
    validate_category_name(&coupon.category)?;
    validate_non_negative("min_value", coupon.min_cart_value)?;
    validate_non_negative("max_value", coupon.max_cart_value)?;
    validate_non_negative("max_discount", coupon.max_discount)?;

    if coupon.min_cart_value > coupon.max_cart_value {
        return Err(ValidationError::Inconsistent {
            field: "min_value".to_string(),
            reason: "must not exceed max_value".to_string(),
        });
    }

    if coupon.discount_percent.bps() > MAX_DISCOUNT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "discount_percent".to_string(),
            min: 0,
            max: 100,
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
    use crate::types::DiscountRate;

    fn coupon() -> NewCoupon {
        NewCoupon {
            category: "seasonal".to_string(),
            min_cart_value: Money::zero(),
            max_cart_value: Money::from_units(5000),
            discount_percent: DiscountRate::from_bps(1000),
            max_discount: Money::from_units(300),
            description: "10% off up to 300".to_string(),
        }
    }

    #[test]
    fn test_validate_names() {
        assert_eq!(validate_product_name("Kettle").unwrap(), "Kettle");
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
        assert_eq!(validate_category_name(" Festive ").unwrap(), "Festive");
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(250).unwrap(), 250);
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_stock_allows_zero() {
        assert_eq!(validate_stock(0).unwrap(), 0);
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_amounts() {
        assert!(validate_cart_value(Money::zero()).is_ok());
        assert!(validate_cart_value(Money::from_cents(-1)).is_err());
        assert!(validate_wallet_amount(Money::from_units(50)).is_ok());
        assert!(validate_wallet_amount(Money::from_units(-50)).is_err());
    }

    #[test]
    fn test_validate_birth_month() {
        assert_eq!(validate_birth_month(1).unwrap().number(), 1);
        assert_eq!(validate_birth_month(12).unwrap().number(), 12);
        assert!(validate_birth_month(0).is_err());
        assert!(validate_birth_month(13).is_err());
        assert!(validate_birth_month(-4).is_err());
    }

    #[test]
    fn test_validate_coupon() {
        assert!(validate_coupon(&coupon()).is_ok());

        let mut inverted = coupon();
        inverted.min_cart_value = Money::from_units(6000);
        assert!(matches!(
            validate_coupon(&inverted),
            Err(ValidationError::Inconsistent { .. })
        ));

        let mut too_generous = coupon();
        too_generous.discount_percent = DiscountRate::from_bps(10_001);
        assert!(validate_coupon(&too_generous).is_err());

        let mut negative_cap = coupon();
        negative_cap.max_discount = Money::from_cents(-1);
        assert!(validate_coupon(&negative_cap).is_err());
    }
}
