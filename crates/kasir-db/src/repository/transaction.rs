//! # Transaction Repository
//!
//! The atomic checkout writer. Converts a validated [`CheckoutPlan`] into a
//! transaction header, its detail rows, and the matching stock decrements,
//! all inside one database transaction.
//!
//! ## The Atomic Unit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Write Path                                 │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  INSERT transactions (total_amount, created_at) RETURNING ...           │
//! │    │                                                                    │
//! │    ▼  for each plan line                                                │
//! │  UPDATE products SET stock = stock - qty                                │
//! │  WHERE id = ? AND stock >= qty        ← conditional decrement           │
//! │    │                                                                    │
//! │    ├── 0 rows affected → InsufficientStock, ROLLBACK everything         │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  INSERT transaction_details (...) RETURNING ...                         │
//! │    │                                                                    │
//! │    ▼  all lines landed                                                  │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Either the header, every detail and every decrement become visible     │
//! │  together, or none of them do. No partial checkouts.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why the Decrement Re-Checks Stock
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two checkouts race over stock = 1:                                     │
//! │                                                                         │
//! │  A: snapshot reads stock 1 ✓        B: snapshot reads stock 1 ✓         │
//! │  A: decrement (1 >= 1) → stock 0    B: decrement (0 >= 1) → 0 rows      │
//! │  A: COMMIT                          B: ROLLBACK, InsufficientStock      │
//! │                                                                         │
//! │  The snapshot check in kasir-core is advisory; the guard on this        │
//! │  UPDATE is what keeps stock from going negative.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use kasir_core::{CheckoutPlan, CheckoutReceipt, Transaction, TransactionDetail};

/// Repository owning the atomic checkout write.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Writes a checkout plan as one atomic unit.
    ///
    /// ## What This Does
    /// 1. Opens a database transaction
    /// 2. Inserts the header with the plan total and the write timestamp
    /// 3. Per line: decrements stock with a `stock >= quantity` guard,
    ///    then inserts the detail row
    /// 4. Commits only after every line landed
    ///
    /// ## Returns
    /// * `Ok(CheckoutReceipt)` - Header plus details, ids assigned
    /// * `Err(DbError::InsufficientStock)` - A guard failed; nothing written
    /// * `Err(DbError::NotFound)` - A product vanished since the snapshot
    ///
    /// Dropping the transaction on any error path rolls everything back, so
    /// a failed checkout leaves stock and the ledger untouched and a retry
    /// against unchanged state reproduces the same failure.
    pub async fn create(&self, plan: &CheckoutPlan) -> DbResult<CheckoutReceipt> {
        debug!(
            lines = plan.lines.len(),
            total_amount = plan.total_amount,
            "Writing checkout transaction"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let created_at = Utc::now();
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (total_amount, created_at)
            VALUES (?1, ?2)
            RETURNING id, total_amount, created_at
            "#,
        )
        .bind(plan.total_amount)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut details = Vec::with_capacity(plan.lines.len());
        for line in &plan.lines {
            // The guard re-checks stock under the write lock. A snapshot
            // that looked fine a moment ago may be stale by now.
            let result = sqlx::query(
                r#"
                UPDATE products
                SET stock = stock - ?1
                WHERE id = ?2 AND stock >= ?1
                "#,
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                // Zero rows means the guard failed or the row is gone.
                // Re-read inside the same transaction to tell them apart.
                let available: Option<i64> =
                    sqlx::query_scalar("SELECT stock FROM products WHERE id = ?1")
                        .bind(line.product_id)
                        .fetch_optional(&mut *tx)
                        .await?;

                // tx drops here, rolling back the header and earlier lines
                return Err(match available {
                    Some(available) => DbError::InsufficientStock {
                        name: line.product_name.clone(),
                        available,
                        requested: line.quantity,
                    },
                    None => DbError::not_found("Product", line.product_id),
                });
            }

            let detail = sqlx::query_as::<_, TransactionDetail>(
                r#"
                INSERT INTO transaction_details (transaction_id, product_id, quantity, subtotal)
                VALUES (?1, ?2, ?3, ?4)
                RETURNING id, transaction_id, product_id, quantity, subtotal
                "#,
            )
            .bind(transaction.id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.subtotal)
            .fetch_one(&mut *tx)
            .await?;
            details.push(detail);
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(
            transaction_id = transaction.id,
            total_amount = transaction.total_amount,
            lines = details.len(),
            "Checkout committed"
        );

        Ok(CheckoutReceipt {
            transaction,
            details,
        })
    }

    /// Counts transaction headers (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts detail rows (for diagnostics and tests).
    pub async fn detail_count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transaction_details")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
