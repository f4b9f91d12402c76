//! Route definitions for the `/properties` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /my-listings/{user_email}  -> my_listings
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// PUT    /{id}/sold                 -> mark_sold
/// POST   /{id}/report               -> report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(property::list).post(property::create))
        .route("/my-listings/{user_email}", get(property::my_listings))
        .route("/{id}", get(property::get_by_id).put(property::update))
        .route("/{id}/sold", put(property::mark_sold))
        .route("/{id}/report", post(property::report))
}
