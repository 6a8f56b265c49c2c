//! Daily report handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use kasir_core::DailyReport;

use crate::error::ApiError;
use crate::state::AppState;

/// Today's sales report: total revenue, transaction count, best seller.
///
/// "Today" is the UTC calendar day. Either the whole report is computed or
/// the request fails; no partial totals are returned.
pub async fn daily_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DailyReport>, ApiError> {
    let report = state.db.reports().daily_report().await?;

    Ok(Json(report))
}
