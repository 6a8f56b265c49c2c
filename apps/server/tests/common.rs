//! Common test utilities for kasir-server integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::http::StatusCode;
use axum::Router;
use axum_test::{TestResponse, TestServer};
use serde_json::json;
use tempfile::TempDir;

use kasir_db::{Database, DbConfig};
use kasir_server::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh file-backed database.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("kasir-test.db");

        let db = Database::new(DbConfig::new(&db_path))
            .await
            .expect("Failed to open database");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            database_path: db_path.to_string_lossy().to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(db, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }

    /// Seed a product through the API; returns its assigned id.
    pub async fn seed_product(&self, nama: &str, harga: i64, stok: i64) -> i64 {
        let response = self
            .server
            .post("/api/produk")
            .json(&json!({ "nama": nama, "harga": harga, "stok": stok }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        body["id"].as_i64().expect("product id")
    }

    /// Run a single-product checkout; returns the raw response.
    pub async fn checkout_one(&self, product_id: i64, quantity: i64) -> TestResponse {
        self.server
            .post("/api/checkout")
            .json(&json!({ "items": [{ "product_id": product_id, "quantity": quantity }] }))
            .await
    }

    /// Fetch a product's current stock level.
    pub async fn stock_of(&self, product_id: i64) -> i64 {
        let response = self.server.get(&format!("/api/produk/{product_id}")).await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["stok"].as_i64().expect("product stock")
    }
}
