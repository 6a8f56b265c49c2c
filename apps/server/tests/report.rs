//! Daily report integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

#[tokio::test]
async fn report_empty_day_returns_zeros_and_sentinel() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/report/hari-ini").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_revenue"], 0);
    assert_eq!(body["total_transaksi"], 0);
    assert_eq!(body["produk_terlaris"], "-");
}

#[tokio::test]
async fn report_reflects_single_checkout() {
    let harness = TestHarness::new().await;
    let id = harness.seed_product("Indomie Goreng", 3500, 50).await;

    harness
        .checkout_one(id, 2)
        .await
        .assert_status(StatusCode::CREATED);

    let response = harness.server.get("/api/report/hari-ini").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_revenue"], 7000);
    assert_eq!(body["total_transaksi"], 1);
    assert_eq!(body["produk_terlaris"], "Indomie Goreng");
}

#[tokio::test]
async fn report_counts_transactions_not_items() {
    let harness = TestHarness::new().await;
    let id = harness.seed_product("Kopi Susu", 5000, 30).await;

    harness
        .checkout_one(id, 3)
        .await
        .assert_status(StatusCode::CREATED);
    harness
        .checkout_one(id, 1)
        .await
        .assert_status(StatusCode::CREATED);

    let response = harness.server.get("/api/report/hari-ini").await;

    let body: serde_json::Value = response.json();
    // 4 units sold across 2 transactions
    assert_eq!(body["total_revenue"], 20_000);
    assert_eq!(body["total_transaksi"], 2);
}

#[tokio::test]
async fn report_best_seller_ranked_by_quantity_not_revenue() {
    let harness = TestHarness::new().await;
    let permen = harness.seed_product("Permen", 100, 50).await;
    let rokok = harness.seed_product("Rokok", 10_000, 50).await;

    // Permen: 5 units for 500. Rokok: 2 units for 20,000.
    harness
        .checkout_one(permen, 5)
        .await
        .assert_status(StatusCode::CREATED);
    harness
        .checkout_one(rokok, 2)
        .await
        .assert_status(StatusCode::CREATED);

    let response = harness.server.get("/api/report/hari-ini").await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["total_revenue"], 20_500);
    assert_eq!(body["produk_terlaris"], "Permen");
}

#[tokio::test]
async fn report_excludes_failed_checkouts() {
    let harness = TestHarness::new().await;
    let id = harness.seed_product("Teh Botol", 4000, 1).await;

    harness
        .server
        .post("/api/checkout")
        .json(&json!({ "items": [{ "product_id": id, "quantity": 5 }] }))
        .await
        .assert_status_bad_request();

    let response = harness.server.get("/api/report/hari-ini").await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["total_revenue"], 0);
    assert_eq!(body["total_transaksi"], 0);
    assert_eq!(body["produk_terlaris"], "-");
}
