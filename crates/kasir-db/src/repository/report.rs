//! # Report Repository
//!
//! Daily sales aggregates over the transaction ledger.
//!
//! ## Report Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Daily Report Aggregates                              │
//! │                                                                         │
//! │  "today" = the current UTC calendar day, half-open:                     │
//! │            [00:00 today, 00:00 tomorrow)                                │
//! │                                                                         │
//! │  total_revenue    SUM(total_amount)  over today's transactions          │
//! │  total_transaksi  COUNT(*)           over today's transactions          │
//! │  produk_terlaris  product name with the highest SUM(quantity)           │
//! │                   across today's details, "-" when no sales             │
//! │                                                                         │
//! │  Three independent read-only queries per call. No caching: a report     │
//! │  is as fresh as the moment it was asked for.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ties for best seller break on the lower product id, so a day with equal
//! quantities reports the same product every time.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kasir_core::DailyReport;

/// Repository for sales report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Total revenue for the current UTC day.
    ///
    /// Sums `total_amount` over today's transactions; 0 when there are none.
    pub async fn revenue_today(&self) -> DbResult<i64> {
        let (start, end) = today_bounds();

        let revenue: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)
            FROM transactions
            WHERE created_at >= ?1 AND created_at < ?2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }

    /// Number of transactions committed in the current UTC day.
    pub async fn count_today(&self) -> DbResult<i64> {
        let (start, end) = today_bounds();

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE created_at >= ?1 AND created_at < ?2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Name of today's best-selling product by summed quantity.
    ///
    /// ## Returns
    /// * `Ok(Some(name))` - At least one sale today
    /// * `Ok(None)` - No sales today
    ///
    /// Quantities are summed per product across every transaction of the
    /// day; revenue plays no part. Ties break on the lower product id.
    pub async fn best_seller_today(&self) -> DbResult<Option<String>> {
        let (start, end) = today_bounds();

        let name: Option<String> = sqlx::query_scalar(
            r#"
            SELECT p.name
            FROM transaction_details td
            JOIN transactions t ON td.transaction_id = t.id
            JOIN products p ON td.product_id = p.id
            WHERE t.created_at >= ?1 AND t.created_at < ?2
            GROUP BY p.id, p.name
            ORDER BY SUM(td.quantity) DESC, p.id ASC
            LIMIT 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await?;

        Ok(name)
    }

    /// Builds the full daily report.
    ///
    /// Any failing aggregate fails the whole report; a partial report is
    /// never returned.
    pub async fn daily_report(&self) -> DbResult<DailyReport> {
        let total_revenue = self.revenue_today().await?;
        let total_transactions = self.count_today().await?;
        let best_seller = self
            .best_seller_today()
            .await?
            .unwrap_or_else(|| DailyReport::NO_BEST_SELLER.to_string());

        debug!(
            total_revenue,
            total_transactions,
            best_seller = %best_seller,
            "Built daily report"
        );

        Ok(DailyReport {
            total_revenue,
            total_transactions,
            best_seller,
        })
    }
}

/// Half-open UTC bounds of the current calendar day.
///
/// Bounds are bound as the same chrono type the writer stamps `created_at`
/// with, so stored values and bounds compare consistently.
fn today_bounds() -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

// =============================================================================
// Unit Tests
// =============================================================================
