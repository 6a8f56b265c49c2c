//! Product CRUD handlers.
//!
//! Wire field names (`nama`, `harga`, `stok`) are kept for compatibility
//! with clients of the original deployment.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use kasir_core::validation::{validate_price, validate_product_name, validate_stock};
use kasir_core::Product;

use crate::error::ApiError;
use crate::state::AppState;

/// Product list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Case-insensitive substring filter on the product name.
    pub nama: Option<String>,
}

/// Product create/update request body.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    /// Product name.
    pub nama: String,
    /// Unit price in the smallest currency unit.
    pub harga: i64,
    /// Units in stock.
    pub stok: i64,
}

/// List products, optionally filtered by `?nama=`.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.db.products().list(query.nama.as_deref()).await?;

    Ok(Json(products))
}

/// Get a single product by id.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product not found: {id}")))?;

    Ok(Json(product))
}

/// Create a product.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = payload?;

    validate_product_name(&body.nama)?;
    validate_price(body.harga)?;
    validate_stock(body.stok)?;

    let product = state
        .db
        .products()
        .insert(body.nama.trim(), body.harga, body.stok)
        .await?;

    tracing::info!(id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update an existing product. All fields are replaced.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(body) = payload?;

    validate_product_name(&body.nama)?;
    validate_price(body.harga)?;
    validate_stock(body.stok)?;

    let product = state
        .db
        .products()
        .update(id, body.nama.trim(), body.harga, body.stok)
        .await?;

    Ok(Json(product))
}

/// Delete a product.
///
/// Products referenced by past transactions cannot be deleted; the foreign
/// key on `transaction_details` keeps the ledger consistent.
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.db.products().delete(id).await?;

    tracing::info!(id, "Product deleted");

    Ok(Json(serde_json::json!({ "message": "Product deleted" })))
}
