//! Route definitions for the `/users` identity touchpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /login              -> login
/// POST /logout/{email}     -> logout
/// POST /activity/{email}   -> activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(user::login))
        .route("/logout/{email}", post(user::logout))
        .route("/activity/{email}", post(user::activity))
}
