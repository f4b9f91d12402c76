//! Route definitions for the `/premium` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::premium;
use crate::state::AppState;

/// Routes mounted at `/premium`.
///
/// ```text
/// POST /purchase/initiate      -> initiate
/// POST /purchase/complete      -> complete
/// POST /activate               -> activate
/// GET  /status/{user_email}    -> status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/purchase/initiate", post(premium::initiate))
        .route("/purchase/complete", post(premium::complete))
        .route("/activate", post(premium::activate))
        .route("/status/{user_email}", get(premium::status))
}
