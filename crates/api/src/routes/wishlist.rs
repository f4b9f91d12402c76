//! Route definitions for the `/wishlist` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wishlist;
use crate::state::AppState;

/// Routes mounted at `/wishlist`.
///
/// ```text
/// POST   /                              -> add
/// GET    /{user_email}                  -> list
/// GET    /{user_email}/{property_id}    -> check
/// DELETE /{user_email}/{property_id}    -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(wishlist::add))
        .route("/{user_email}", get(wishlist::list))
        .route(
            "/{user_email}/{property_id}",
            get(wishlist::check).delete(wishlist::remove),
        )
}
