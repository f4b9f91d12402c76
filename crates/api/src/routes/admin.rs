//! Route definitions for the `/admin` surface.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /users                           -> list_users
/// PATCH  /users/{id}/status               -> update_user_status
/// GET    /properties                      -> list_properties
/// PATCH  /properties/{id}/status          -> update_property_status
/// DELETE /properties/{id}                 -> delete_property
/// GET    /categories                      -> list_categories
/// POST   /categories                      -> create_category
/// DELETE /categories/{id}                 -> delete_category
/// GET    /reported-listings               -> list_reported_listings
/// PATCH  /reported-listings/{id}/status   -> update_report_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}/status", patch(admin::update_user_status))
        .route("/properties", get(admin::list_properties))
        .route(
            "/properties/{id}/status",
            patch(admin::update_property_status),
        )
        .route("/properties/{id}", delete(admin::delete_property))
        .route(
            "/categories",
            get(admin::list_categories).post(admin::create_category),
        )
        .route("/categories/{id}", delete(admin::delete_category))
        .route("/reported-listings", get(admin::list_reported_listings))
        .route(
            "/reported-listings/{id}/status",
            patch(admin::update_report_status),
        )
}
