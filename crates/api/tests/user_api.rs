mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, post_json};

#[sqlx::test(migrations = "../db/migrations")]
async fn login_upserts_the_user(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users/login",
        json!({
            "email": "asha@example.com",
            "name": "Asha Rao",
            "picture": "https://cdn.example.com/asha.png",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["email"], "asha@example.com");
    assert_eq!(json["name"], "Asha Rao");
    assert_eq!(json["is_logged_in"], true);
    assert_eq!(json["status"], "active");
    assert!(json["last_login_at"].is_string());

    // A second login updates the profile instead of duplicating the row.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users/login",
        json!({ "email": "asha@example.com", "name": "A. Rao" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "A. Rao");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_clears_the_session_flag(pool: PgPool) {
    post_json(
        build_test_app(pool.clone()),
        "/api/v1/users/login",
        json!({ "email": "asha@example.com", "name": "Asha Rao" }),
    )
    .await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users/logout/asha@example.com",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Logging out an unknown email still succeeds.
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users/logout/ghost@example.com",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_ping_succeeds_for_any_email(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users/activity/unseen@example.com",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Activity updated");
}
