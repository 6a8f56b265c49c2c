//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{category, checkout, health, product, report};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /` - Welcome banner
/// - `GET /health` - Health check with database ping
///
/// ## Products
/// - `GET /api/produk` - List products (`?nama=` filters by name)
/// - `POST /api/produk` - Create product
/// - `GET /api/produk/:id` - Get product
/// - `PUT /api/produk/:id` - Update product
/// - `DELETE /api/produk/:id` - Delete product
///
/// ## Categories
/// - `GET /api/categories` - List categories
/// - `POST /api/categories` - Create category
/// - `GET /api/categories/:id` - Get category
/// - `PUT /api/categories/:id` - Update category
/// - `DELETE /api/categories/:id` - Delete category
///
/// ## Checkout & Reporting
/// - `POST /api/checkout` - Convert a cart into a transaction
/// - `GET /api/report/hari-ini` - Today's sales report
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    Router::new()
        // Public
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Products
        .route(
            "/api/produk",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/api/produk/:id",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        // Categories
        .route(
            "/api/categories",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/api/categories/:id",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        // Checkout & reporting
        .route("/api/checkout", post(checkout::checkout))
        .route("/api/report/hari-ini", get(report::daily_report))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}
