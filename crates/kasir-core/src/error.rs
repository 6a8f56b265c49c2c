//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  kasir-core errors (this file)                                      │
//! │  ├── CheckoutError    - Cart rejected before any write              │
//! │  └── ValidationError  - CRUD field rule failures                    │
//! │                                                                     │
//! │  kasir-db errors (separate crate)                                   │
//! │  └── DbError          - Storage failures + the writer's own         │
//! │                         insufficient-stock conflict                 │
//! │                                                                     │
//! │  HTTP API errors (in the server)                                    │
//! │  └── ApiError         - Status code + JSON body the client sees     │
//! │                                                                     │
//! │  Flow: CheckoutError / ValidationError → ApiError (400)             │
//! │        DbError::InsufficientStock     → ApiError (400)              │
//! │        other DbError                  → ApiError (500)              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, id, quantity)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Reasons a checkout request is rejected during validation.
///
/// All variants are client errors: nothing has been written when they occur.
/// Validation walks the cart in item-list order and for each item checks
/// quantity, then product existence, then stock, then prices the line with
/// overflow-checked math; the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The request carried no items at all.
    #[error("checkout items cannot be empty")]
    EmptyCart,

    /// A requested quantity was zero or negative.
    #[error("quantity for product {product_id} must be greater than 0, got {quantity}")]
    InvalidQuantity { product_id: i64, quantity: i64 },

    /// No product exists with the requested id.
    #[error("product not found: {0}")]
    ProductNotFound(i64),

    /// Requested quantity exceeds the stock snapshot read at validation time.
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout { product: Kopi Susu, quantity: 5 }
    ///      │
    ///      ▼
    /// Snapshot read: stock = 3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Kopi Susu", available: 3, requested: 5 }
    /// ```
    #[error("insufficient stock for product {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A subtotal or the running total exceeded `i64::MAX` during pricing.
    ///
    /// Reachable from valid input: field validation only checks signs, so a
    /// large enough price times quantity cannot be represented.
    #[error("cart total overflows while pricing product {product_id}")]
    AmountOverflow { product_id: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation failures for the CRUD surface.
///
/// These occur before business logic runs and map straight to client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_messages() {
        let err = CheckoutError::InsufficientStock {
            name: "Kopi Susu".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for product Kopi Susu: available 3, requested 5"
        );

        let err = CheckoutError::ProductNotFound(42);
        assert_eq!(err.to_string(), "product not found: 42");

        let err = CheckoutError::InvalidQuantity {
            product_id: 7,
            quantity: 0,
        };
        assert_eq!(
            err.to_string(),
            "quantity for product 7 must be greater than 0, got 0"
        );

        let err = CheckoutError::AmountOverflow { product_id: 3 };
        assert_eq!(err.to_string(), "cart total overflows while pricing product 3");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
