mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{
    body_json, build_test_app, create_property, delete, get, patch_json, post_json, register_user,
};

#[sqlx::test(migrations = "../db/migrations")]
async fn user_moderation(pool: PgPool) {
    register_user(&pool, "one@example.com").await;
    register_user(&pool, "two@example.com").await;

    let response = get(build_test_app(pool.clone()), "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    let user_id = users
        .iter()
        .find(|u| u["email"] == "one@example.com")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/users/{user_id}/status"),
        json!({ "status": "suspended" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "suspended");

    // Unknown status values are rejected before touching the database.
    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/users/{user_id}/status"),
        json!({ "status": "banned" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json(
        build_test_app(pool.clone()),
        "/api/v1/admin/users/999999/status",
        json!({ "status": "active" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn property_moderation(pool: PgPool) {
    register_user(&pool, "owner@example.com").await;
    let id = create_property(&pool, "owner@example.com", "Flagged", 40.0).await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/properties/{id}/status"),
        json!({ "status": "disabled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "disabled");

    // Disabled listings drop out of the public feed but stay visible to
    // the admin index.
    let response = get(build_test_app(pool.clone()), "/api/v1/properties").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let response = get(build_test_app(pool.clone()), "/api/v1/admin/properties").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/properties/{id}/status"),
        json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_property_keeps_the_quota_counter(pool: PgPool) {
    register_user(&pool, "owner@example.com").await;
    create_property(&pool, "owner@example.com", "First", 40.0).await;
    let id = create_property(&pool, "owner@example.com", "Second", 50.0).await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/properties/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/properties/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The counter is "ever listed": deletion does not refund the slot,
    // so a free-tier third listing still hits the quota.
    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/premium/status/owner@example.com",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["property_count"], 2);

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/properties",
        common::property_payload("owner@example.com", "Third", 60.0),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Deleting again is 404.
    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/properties/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn category_management(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/admin/categories",
        json!({ "name": "Farmhouse", "description": "Rural holdings" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(json["name"], "Farmhouse");

    // Blank names are rejected.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/admin/categories",
        json!({ "name": "  ", "description": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(build_test_app(pool.clone()), "/api/v1/admin/categories").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/categories/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/categories/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn report_triage(pool: PgPool) {
    register_user(&pool, "owner@example.com").await;
    register_user(&pool, "reporter@example.com").await;
    let id = create_property(&pool, "owner@example.com", "Shady", 40.0).await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/properties/{id}/report"),
        json!({
            "reported_by": "reporter@example.com",
            "reason": "spam",
            "description": "Same listing posted five times.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(
        build_test_app(pool.clone()),
        "/api/v1/admin/reported-listings",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    let report_id = reports[0]["id"].as_i64().unwrap();
    assert_eq!(reports[0]["status"], "pending");

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/reported-listings/{report_id}/status"),
        json!({ "status": "resolved" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "resolved");

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/reported-listings/{report_id}/status"),
        json!({ "status": "ignored" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
