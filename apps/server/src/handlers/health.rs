//! Health check and welcome handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status: "ok" when the database responds, "degraded" otherwise.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Database status: "up" or "down".
    pub database: String,
}

/// Health check endpoint with a live database ping.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let db_up = state.db.health_check().await;

    Json(HealthResponse {
        status: if db_up { "ok" } else { "degraded" }.to_string(),
        service: "kasir-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if db_up { "up" } else { "down" }.to_string(),
    })
}

/// Welcome banner at the root path.
pub async fn root() -> &'static str {
    "Welcome to Kasir API"
}
