//! Checkout handler.
//!
//! Orchestrates a checkout end to end:
//!
//! 1. Parse the cart from the request body.
//! 2. Prefetch the referenced products into a snapshot map.
//! 3. Validate the cart against the snapshot and price it (kasir-core).
//! 4. Hand the priced plan to the atomic writer (kasir-db).
//!
//! The snapshot is advisory: stock may change between steps 2 and 4. The
//! writer's conditional decrement is what actually guarantees stock never
//! goes negative; validation here exists to reject bad carts with a precise
//! error before any write happens.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use kasir_core::checkout;
use kasir_core::{CheckoutReceipt, CheckoutRequest};
use kasir_db::DbError;

use crate::error::ApiError;
use crate::state::AppState;

/// Convert a cart into a recorded transaction.
///
/// Replies `201 Created` with the transaction header and its detail rows.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CheckoutReceipt>), ApiError> {
    let Json(request) = payload?;

    // Products missing from the snapshot stay absent; validate reports them
    let ids: Vec<i64> = request.items.iter().map(|item| item.product_id).collect();
    let products = state.db.products().snapshot(&ids).await?;

    let plan = checkout::validate(&request, &products)?;

    let receipt = state
        .db
        .transactions()
        .create(&plan)
        .await
        .map_err(map_writer_error)?;

    tracing::info!(
        transaction_id = receipt.transaction.id,
        total_amount = receipt.transaction.total_amount,
        lines = receipt.details.len(),
        "Checkout completed"
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Folds writer errors into the cart taxonomy.
///
/// The snapshot is read outside the write transaction, so a product can
/// vanish between it and the guarded decrement. The writer reports that as
/// `NotFound`; to the client it is the same invalid cart as a product that
/// never existed, so it becomes a 400. CRUD routes keep their 404 through
/// the blanket `DbError` conversion.
fn map_writer_error(err: DbError) -> ApiError {
    match err {
        DbError::NotFound { id, .. } => ApiError::BadRequest(format!("product not found: {id}")),
        other => other.into(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
