//! Handlers for the `/users` identity-provider touchpoints.
//!
//! Authentication itself is external; these endpoints only mirror login,
//! logout, and activity pings into the user record.

use axum::extract::{Path, State};
use axum::Json;

use basera_db::models::user::{LoginUser, User};
use basera_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/users/login
///
/// Upserts the user and stamps login/activity times.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::record_login(&state.pool, &input).await?;
    tracing::debug!(user = %user.email, "User logged in");
    Ok(Json(user))
}

/// POST /api/v1/users/logout/{email}
///
/// Succeeds even for unknown emails, matching the original surface.
pub async fn logout(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    UserRepo::record_logout(&state.pool, &email).await?;
    Ok(Json(serde_json::json!({ "message": "Logged out successfully" })))
}

/// POST /api/v1/users/activity/{email}
pub async fn activity(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    UserRepo::touch_activity(&state.pool, &email).await?;
    Ok(Json(serde_json::json!({ "message": "Activity updated" })))
}
