//! # Error Types
//!
//! Domain-specific error types for bazaar-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bazaar-core errors (this file)                                        │
//! │  ├── CoreError        - Business rule and lookup failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  HTTP errors (apps/api)                                                │
//! │  └── ApiError         - What clients see (code + message + status)     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → JSON response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entity, ID, stock)
//! 3. Errors are enum variants, never String
//! 4. Lookups that answer 400 and lookups that answer 404 are distinct variants

use thiserror::Error;

use crate::types::EntityId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Customer referenced by a customer-facing operation does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(EntityId),

    /// Coupon named in an apply-discount request does not exist.
    #[error("Coupon not found: {0}")]
    CouponNotFound(EntityId),

    /// Entity targeted by an admin removal or a direct lookup does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Product is missing or has too little stock for the order.
    ///
    /// ## User Workflow
    /// ```text
    /// place-order (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// ProductUnavailable { product_id: 7, available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// 400 PRODUCT_UNAVAILABLE, stock untouched
    /// ```
    #[error("Product {product_id} unavailable: available {available}, requested {requested}")]
    ProductUnavailable {
        product_id: EntityId,
        available: u64,
        requested: u64,
    },

    /// Apply-discount `option` was neither `cash` nor `points`.
    #[error("Invalid option: {0:?}")]
    InvalidOption(String),

    /// Admin `action` was neither `add` nor `remove`.
    #[error("Invalid action: {0:?}")]
    InvalidAction(String),

    /// Admin activation attempted a second time.
    #[error("Admin already set")]
    AdminAlreadySet,

    /// Supplied admin secret does not match.
    #[error("Invalid secret")]
    InvalidSecret,

    /// Catalog mutation attempted before the admin was activated.
    #[error("Admin has not been activated")]
    AdminNotActivated,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Two related fields are inconsistent with each other.
    #[error("{field} is invalid: {reason}")]
    Inconsistent { field: String, reason: String },

    /// Duplicate value (e.g., category name already present).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A computed amount or balance no longer fits its type.
    #[error("{field} exceeds the supported range")]
    Overflow { field: String },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Overflow`].
    pub fn overflow(field: &str) -> Self {
        ValidationError::Overflow {
            field: field.to_string(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductUnavailable {
            product_id: 7,
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Product 7 unavailable: available 3, requested 5"
        );

        assert_eq!(
            CoreError::not_found("Coupon", 12).to_string(),
            "Coupon not found: 12"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "category".to_string(),
            value: "Seasonal".to_string(),
        };
        assert_eq!(err.to_string(), "category 'Seasonal' already exists");

        assert_eq!(
            ValidationError::overflow("wallet").to_string(),
            "wallet exceeds the supported range"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
