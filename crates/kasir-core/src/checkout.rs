//! # Checkout Planning
//!
//! Pure cart validation and pricing. Takes a checkout request plus a snapshot
//! of the referenced products and either rejects the cart or produces a
//! [`CheckoutPlan`] ready to be written atomically by the storage layer.
//!
//! ## Checkout Pipeline
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Pipeline                              │
//! │                                                                      │
//! │  CheckoutRequest ──► validate() ──► CheckoutPlan ──► storage writer  │
//! │        │                 │                                           │
//! │        │                 ├── EmptyCart                               │
//! │        │                 ├── InvalidQuantity   (per item, in order)  │
//! │        │                 ├── ProductNotFound                         │
//! │        │                 ├── InsufficientStock (snapshot check)      │
//! │        │                 └── AmountOverflow    (i64 pricing cap)     │
//! │        │                                                             │
//! │  products snapshot (id → Product), read by the caller                │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are checked in request order and the first failure wins, so clients
//! get a stable error for a given cart. The stock check here is advisory: it
//! runs against a snapshot and the storage writer re-checks under its own
//! transaction before committing.

use std::collections::HashMap;

use crate::error::CheckoutError;
use crate::types::{CheckoutRequest, Product};

// =============================================================================
// Plan Types
// =============================================================================

/// One priced cart line, ready to become a transaction detail row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLine {
    pub product_id: i64,
    /// Carried so the writer can name the product in conflict errors.
    pub product_name: String,
    pub quantity: i64,
    /// `price × quantity` at validation time.
    pub subtotal: i64,
}

/// A validated, fully priced cart.
///
/// Construction goes through [`validate`], so holding a plan means every line
/// referenced an existing product, every quantity was positive, the snapshot
/// had enough stock for each line individually, and all amounts fit in `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPlan {
    pub lines: Vec<CheckoutLine>,
    /// Sum of all line subtotals.
    pub total_amount: i64,
}

impl CheckoutPlan {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validate a cart against a product snapshot and price it.
///
/// Checks per item, in request order: quantity > 0, product exists in the
/// snapshot, snapshot stock covers the quantity. The first failing check
/// aborts with its error and nothing else is inspected.
///
/// Pricing uses checked arithmetic: a cart whose subtotal or total would
/// exceed `i64::MAX` is rejected with [`CheckoutError::AmountOverflow`]
/// instead of wrapping.
///
/// A cart listing the same product twice is priced as two independent lines;
/// the combined quantity is only enforced by the storage writer's conditional
/// decrement.
pub fn validate(
    request: &CheckoutRequest,
    products: &HashMap<i64, Product>,
) -> Result<CheckoutPlan, CheckoutError> {
    if request.items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut lines = Vec::with_capacity(request.items.len());
    let mut total_amount: i64 = 0;

    for item in &request.items {
        if item.quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity {
                product_id: item.product_id,
                quantity: item.quantity,
            });
        }

        let product = products
            .get(&item.product_id)
            .ok_or(CheckoutError::ProductNotFound(item.product_id))?;

        if !product.has_stock(item.quantity) {
            return Err(CheckoutError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: item.quantity,
            });
        }

        let subtotal = product
            .price
            .checked_mul(item.quantity)
            .ok_or(CheckoutError::AmountOverflow { product_id: product.id })?;
        total_amount = total_amount
            .checked_add(subtotal)
            .ok_or(CheckoutError::AmountOverflow { product_id: product.id })?;
        lines.push(CheckoutLine {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity: item.quantity,
            subtotal,
        });
    }

    Ok(CheckoutPlan {
        lines,
        total_amount,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckoutItem;

    fn product(id: i64, name: &str, price: i64, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            stock,
        }
    }

    fn snapshot(products: Vec<Product>) -> HashMap<i64, Product> {
        products.into_iter().map(|p| (p.id, p)).collect()
    }

    #[test]
    fn test_validate_prices_cart() {
        let products = snapshot(vec![
            product(1, "Indomie Goreng", 3500, 10),
            product(2, "Kopi Susu", 5000, 5),
        ]);
        let request = CheckoutRequest {
            items: vec![
                CheckoutItem {
                    product_id: 1,
                    quantity: 3,
                },
                CheckoutItem {
                    product_id: 2,
                    quantity: 2,
                },
            ],
        };

        let plan = validate(&request, &products).unwrap();
        assert_eq!(plan.lines.len(), 2);
        assert_eq!(plan.lines[0].subtotal, 10_500);
        assert_eq!(plan.lines[1].subtotal, 10_000);
        assert_eq!(plan.total_amount, 20_500);
        assert_eq!(plan.lines[0].product_name, "Indomie Goreng");
    }

    #[test]
    fn test_validate_rejects_empty_cart() {
        let products = snapshot(vec![product(1, "Indomie Goreng", 3500, 10)]);
        let request = CheckoutRequest { items: vec![] };

        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_quantity() {
        let products = snapshot(vec![product(1, "Indomie Goreng", 3500, 10)]);

        for quantity in [0, -1] {
            let request = CheckoutRequest {
                items: vec![CheckoutItem {
                    product_id: 1,
                    quantity,
                }],
            };
            assert_eq!(
                validate(&request, &products),
                Err(CheckoutError::InvalidQuantity {
                    product_id: 1,
                    quantity,
                })
            );
        }
    }

    #[test]
    fn test_validate_rejects_unknown_product() {
        let products = snapshot(vec![product(1, "Indomie Goreng", 3500, 10)]);
        let request = CheckoutRequest {
            items: vec![CheckoutItem {
                product_id: 99,
                quantity: 1,
            }],
        };

        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::ProductNotFound(99))
        );
    }

    #[test]
    fn test_validate_rejects_insufficient_stock() {
        let products = snapshot(vec![product(2, "Kopi Susu", 5000, 3)]);
        let request = CheckoutRequest {
            items: vec![CheckoutItem {
                product_id: 2,
                quantity: 5,
            }],
        };

        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::InsufficientStock {
                name: "Kopi Susu".to_string(),
                available: 3,
                requested: 5,
            })
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_amounts() {
        // One line whose subtotal cannot be represented
        let products = snapshot(vec![product(1, "Emas Batangan", i64::MAX, 10)]);
        let request = CheckoutRequest {
            items: vec![CheckoutItem {
                product_id: 1,
                quantity: 2,
            }],
        };
        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::AmountOverflow { product_id: 1 })
        );

        // Lines that price individually but whose sum does not
        let products = snapshot(vec![
            product(1, "Emas Batangan", i64::MAX / 2, 10),
            product(2, "Berlian", i64::MAX / 2, 10),
        ]);
        let request = CheckoutRequest {
            items: vec![
                CheckoutItem {
                    product_id: 1,
                    quantity: 2,
                },
                CheckoutItem {
                    product_id: 2,
                    quantity: 2,
                },
            ],
        };
        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::AmountOverflow { product_id: 2 })
        );
    }

    #[test]
    fn test_validate_first_failure_wins() {
        // Item order decides which error surfaces: the bad quantity on the
        // first item masks the missing product on the second.
        let products = snapshot(vec![product(1, "Indomie Goreng", 3500, 10)]);
        let request = CheckoutRequest {
            items: vec![
                CheckoutItem {
                    product_id: 1,
                    quantity: 0,
                },
                CheckoutItem {
                    product_id: 99,
                    quantity: 1,
                },
            ],
        };

        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::InvalidQuantity {
                product_id: 1,
                quantity: 0,
            })
        );
    }

    #[test]
    fn test_validate_checks_quantity_before_lookup() {
        // Zero quantity on an unknown product reports InvalidQuantity, not
        // ProductNotFound.
        let products = snapshot(vec![]);
        let request = CheckoutRequest {
            items: vec![CheckoutItem {
                product_id: 99,
                quantity: 0,
            }],
        };

        assert_eq!(
            validate(&request, &products),
            Err(CheckoutError::InvalidQuantity {
                product_id: 99,
                quantity: 0,
            })
        );
    }

    #[test]
    fn test_validate_duplicate_lines_priced_independently() {
        // Two lines for the same product each pass the snapshot check alone;
        // the writer's conditional decrement is what enforces the sum.
        let products = snapshot(vec![product(1, "Indomie Goreng", 3500, 5)]);
        let request = CheckoutRequest {
            items: vec![
                CheckoutItem {
                    product_id: 1,
                    quantity: 3,
                },
                CheckoutItem {
                    product_id: 1,
                    quantity: 3,
                },
            ],
        };

        let plan = validate(&request, &products).unwrap();
        assert_eq!(plan.lines.len(), 2);
        assert_eq!(plan.total_amount, 21_000);
    }
}
