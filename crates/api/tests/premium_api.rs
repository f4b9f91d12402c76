mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use basera_core::payment::SimulatedGateway;
use common::{
    body_json, build_test_app, build_test_app_with_gateway, get, post_json, register_user,
};

async fn initiate(pool: &PgPool, email: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/initiate",
        json!({ "user_email": email, "payment_method": "card" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["amount"], 299);
    json["transaction_id"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_auto_creates_the_user(pool: PgPool) {
    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/premium/status/new@example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["is_premium"], false);
    assert_eq!(json["property_count"], 0);
    assert!(json["premium_start_date"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn initiate_requires_a_known_user(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/initiate",
        json!({ "user_email": "ghost@example.com", "payment_method": "card" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "USER_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn initiate_rejects_unsupported_payment_methods(pool: PgPool) {
    register_user(&pool, "buyer@example.com").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/initiate",
        json!({ "user_email": "buyer@example.com", "payment_method": "cheque" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"][0]["field"], "payment_method");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn initiate_conflicts_for_premium_members(pool: PgPool) {
    register_user(&pool, "buyer@example.com").await;
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/activate",
        json!({ "user_email": "buyer@example.com", "name": "Buyer" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/initiate",
        json!({ "user_email": "buyer@example.com", "payment_method": "googlepay" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_PREMIUM");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn purchase_flow_completes_exactly_once(pool: PgPool) {
    register_user(&pool, "buyer@example.com").await;
    let transaction_id = initiate(&pool, "buyer@example.com").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/complete",
        json!({ "transaction_id": transaction_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["premium_status"]["is_premium"], true);
    assert!(json["premium_status"]["premium_start_date"].is_string());

    // Status endpoint agrees.
    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/premium/status/buyer@example.com",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["is_premium"], true);

    // Replaying the completion conflicts instead of double-charging.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/complete",
        json!({ "transaction_id": transaction_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ALREADY_COMPLETED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn declined_payment_is_terminal(pool: PgPool) {
    register_user(&pool, "buyer@example.com").await;
    let transaction_id = initiate(&pool, "buyer@example.com").await;

    let declining =
        build_test_app_with_gateway(pool.clone(), Arc::new(SimulatedGateway::always_decline()));
    let response = post_json(
        declining,
        "/api/v1/premium/purchase/complete",
        json!({ "transaction_id": transaction_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PAYMENT_FAILED");

    // The user was not upgraded.
    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/premium/status/buyer@example.com",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["is_premium"], false);

    // Retrying the failed transaction conflicts even if payment would
    // now succeed; the caller must initiate a fresh purchase.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/complete",
        json!({ "transaction_id": transaction_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // A fresh initiate-complete cycle still works.
    let transaction_id = initiate(&pool, "buyer@example.com").await;
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/complete",
        json!({ "transaction_id": transaction_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn completing_an_unknown_transaction_is_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/purchase/complete",
        json!({ "transaction_id": "does-not-exist" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "TRANSACTION_NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activate_upgrades_and_creates_on_first_sight(pool: PgPool) {
    // No prior login; activation creates the user record.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/premium/activate",
        json!({ "user_email": "fresh@example.com", "name": "Fresh" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/premium/status/fresh@example.com",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["is_premium"], true);
    assert!(json["premium_start_date"].is_string());
}
