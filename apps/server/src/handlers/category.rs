//! Category CRUD handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use kasir_core::validation::validate_category_name;
use kasir_core::Category;

use crate::error::ApiError;
use crate::state::AppState;

/// Category create/update request body.
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    /// Caller-supplied id; a UUID v4 is generated when absent or blank.
    pub id: Option<String>,
    /// Category name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// List all categories, sorted by name.
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.db.categories().list().await?;

    Ok(Json(categories))
}

/// Get a single category by id.
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .db
        .categories()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Category not found: {id}")))?;

    Ok(Json(category))
}

/// Create a category.
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(body) = payload?;

    validate_category_name(&body.name)?;

    let category = state
        .db
        .categories()
        .insert(body.id, body.name.trim(), body.description.as_deref())
        .await?;

    tracing::info!(id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// Update an existing category.
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(body) = payload?;

    validate_category_name(&body.name)?;

    let category = state
        .db
        .categories()
        .update(&id, body.name.trim(), body.description.as_deref())
        .await?;

    Ok(Json(category))
}

/// Delete a category.
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.db.categories().delete(&id).await?;

    tracing::info!(id = %id, "Category deleted");

    Ok(Json(serde_json::json!({ "message": "Category deleted successfully" })))
}
