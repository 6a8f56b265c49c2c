//! # Domain Types
//!
//! Core domain types used throughout the kasir POS backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────────┐  │
//! │  │    Product     │   │  Transaction   │   │ TransactionDetail  │  │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────────  │  │
//! │  │  id (i64)      │   │  id (i64)      │   │  id (i64)          │  │
//! │  │  name          │   │  total_amount  │   │  transaction_id    │  │
//! │  │  price         │   │  created_at    │   │  product_id        │  │
//! │  │  stock         │   └────────────────┘   │  quantity          │  │
//! │  └────────────────┘                        │  subtotal          │  │
//! │                                            └────────────────────┘  │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────────┐  │
//! │  │    Category    │   │ CheckoutRequest│   │    DailyReport     │  │
//! │  │  id (UUID txt) │   │  items: [...]  │   │  revenue / count / │  │
//! │  │  name, descr.  │   └────────────────┘   │  best seller       │  │
//! │  └────────────────┘                        └────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Compatibility
//! The HTTP API predates this codebase and uses Indonesian field names for
//! products (`nama`, `harga`, `stok`) and parts of the report
//! (`total_transaksi`, `produk_terlaris`). Rust field names stay English;
//! serde renames pin the wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Owned by the product store; the checkout subsystem only reads it (as a
/// validation snapshot) and decrements `stock` inside the atomic write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name.
    #[serde(rename = "nama")]
    pub name: String,

    /// Unit price in the smallest currency unit.
    #[serde(rename = "harga")]
    pub price: i64,

    /// Current stock level. Non-negative by the checkout writer's guarantee,
    /// not by a storage constraint.
    #[serde(rename = "stok")]
    pub stock: i64,
}

impl Product {
    /// Checks whether `quantity` units can be covered by the current stock.
    #[inline]
    pub fn has_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category. Sibling CRUD resource; the checkout subsystem never
/// touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Creator-supplied identifier (UUID v4 text when auto-generated).
    pub id: String,

    /// Display name (required, non-empty).
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,
}

// =============================================================================
// Checkout Inputs
// =============================================================================

/// A single requested cart line. Ephemeral input, never persisted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: i64,
    /// Requested quantity; must be > 0.
    pub quantity: i64,
}

/// The checkout request body: an ordered, non-empty sequence of items.
///
/// Order matters: validation walks the items in list order and the first
/// failing item determines the error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
}

// =============================================================================
// Transaction Ledger
// =============================================================================

/// A committed checkout transaction header.
///
/// Immutable once created: together with its details it forms an append-only
/// ledger. `created_at` is the day boundary used by the daily report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    /// Store-assigned identifier.
    pub id: i64,

    /// Sum of all detail subtotals.
    pub total_amount: i64,

    /// Store-assigned creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
}

/// One line item of a committed transaction.
///
/// `subtotal` is a price snapshot: unit price at validation time multiplied
/// by quantity. It is persisted verbatim and never recomputed from the
/// product's current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    /// Store-assigned identifier.
    pub id: i64,

    /// Owning transaction.
    pub transaction_id: i64,

    /// Product sold (reference only; pricing was frozen into `subtotal`).
    pub product_id: i64,

    /// Units sold.
    pub quantity: i64,

    /// Snapshot price x quantity, in the smallest currency unit.
    pub subtotal: i64,
}

/// The checkout operation's output: the committed header plus its details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub transaction: Transaction,
    pub details: Vec<TransactionDetail>,
}

// =============================================================================
// Daily Report
// =============================================================================

/// The daily sales report: three independent aggregates over today's slice
/// of the ledger, combined into one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Sum of `total_amount` over today's transactions; 0 if none.
    pub total_revenue: i64,

    /// Count of today's transactions; 0 if none.
    #[serde(rename = "total_transaksi")]
    pub total_transactions: i64,

    /// Name of the product with the highest summed quantity today, or
    /// [`DailyReport::NO_BEST_SELLER`] when nothing sold.
    #[serde(rename = "produk_terlaris")]
    pub best_seller: String,
}

impl DailyReport {
    /// Sentinel reported as the best seller on a day without sales.
    pub const NO_BEST_SELLER: &'static str = "-";
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_has_stock() {
        let product = Product {
            id: 1,
            name: "Kopi Susu".to_string(),
            price: 1000,
            stock: 5,
        };

        assert!(product.has_stock(5));
        assert!(product.has_stock(1));
        assert!(!product.has_stock(6));
    }

    #[test]
    fn test_product_wire_names() {
        let product = Product {
            id: 1,
            name: "Teh Botol".to_string(),
            price: 4000,
            stock: 12,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "nama": "Teh Botol", "harga": 4000, "stok": 12})
        );
    }

    #[test]
    fn test_checkout_request_parses_wire_shape() {
        let request: CheckoutRequest =
            serde_json::from_str(r#"{"items":[{"product_id":1,"quantity":3}]}"#).unwrap();

        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].product_id, 1);
        assert_eq!(request.items[0].quantity, 3);
    }

    #[test]
    fn test_daily_report_wire_names() {
        let report = DailyReport {
            total_revenue: 3000,
            total_transactions: 1,
            best_seller: "Kopi Susu".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_revenue"], 3000);
        assert_eq!(json["total_transaksi"], 1);
        assert_eq!(json["produk_terlaris"], "Kopi Susu");
    }
}
