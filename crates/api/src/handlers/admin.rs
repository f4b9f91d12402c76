//! Handlers for the `/admin` surface: user suspension, property
//! moderation, categories, and reported listings.
//!
//! Deleting a property deliberately leaves the owner's `property_count`
//! and any wishlist entries untouched; the count is an "ever listed"
//! counter and orphaned wishlist entries are filtered at read time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use basera_core::error::CoreError;
use basera_core::types::DbId;
use basera_db::models::category::{Category, CreateCategory};
use basera_db::models::property::Property;
use basera_db::models::reported_listing::ReportedListing;
use basera_db::models::user::User;
use basera_db::repositories::{CategoryRepo, PropertyRepo, ReportedListingRepo, UserRepo};

use crate::error::AppResult;
use crate::state::AppState;

const USER_STATUSES: &[&str] = &["active", "suspended"];
const PROPERTY_STATUSES: &[&str] = &["active", "disabled", "sold", "rented", "inactive"];
const REPORT_STATUSES: &[&str] = &["pending", "resolved", "dismissed"];

/// Request body for the status-override endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// GET /api/v1/admin/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list_all(&state.pool).await?;
    Ok(Json(users))
}

/// PATCH /api/v1/admin/users/{id}/status
pub async fn update_user_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<StatusUpdate>,
) -> AppResult<Json<User>> {
    if !USER_STATUSES.contains(&body.status.as_str()) {
        return Err(
            CoreError::invalid_field("status", "must be one of: active, suspended").into(),
        );
    }
    let user = UserRepo::set_status(&state.pool, id, &body.status)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    tracing::info!(user_id = id, status = %body.status, "User status updated");
    Ok(Json(user))
}

/// GET /api/v1/admin/properties
///
/// All properties regardless of status, newest first.
pub async fn list_properties(State(state): State<AppState>) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list_all(&state.pool).await?;
    Ok(Json(properties))
}

/// PATCH /api/v1/admin/properties/{id}/status
///
/// Administrative override; not constrained to the core `active ->
/// disabled` transition.
pub async fn update_property_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<StatusUpdate>,
) -> AppResult<Json<Property>> {
    if !PROPERTY_STATUSES.contains(&body.status.as_str()) {
        return Err(CoreError::invalid_field(
            "status",
            "must be one of: active, disabled, sold, rented, inactive",
        )
        .into());
    }
    let property = PropertyRepo::set_status(&state.pool, id, &body.status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id,
        })?;
    tracing::info!(property_id = id, status = %body.status, "Property status updated");
    Ok(Json(property))
}

/// DELETE /api/v1/admin/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = PropertyRepo::hard_delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Property",
            id,
        }
        .into());
    }
    tracing::info!(property_id = id, "Property deleted by admin");
    Ok(Json(serde_json::json!({ "message": "Property deleted successfully" })))
}

/// GET /api/v1/admin/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    if input.name.trim().is_empty() {
        return Err(CoreError::invalid_field("name", "is required").into());
    }
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// DELETE /api/v1/admin/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Category",
            id,
        }
        .into());
    }
    Ok(Json(serde_json::json!({ "message": "Category removed successfully" })))
}

/// GET /api/v1/admin/reported-listings
pub async fn list_reported_listings(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ReportedListing>>> {
    let reports = ReportedListingRepo::list_all(&state.pool).await?;
    Ok(Json(reports))
}

/// PATCH /api/v1/admin/reported-listings/{id}/status
pub async fn update_report_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<StatusUpdate>,
) -> AppResult<Json<ReportedListing>> {
    if !REPORT_STATUSES.contains(&body.status.as_str()) {
        return Err(CoreError::invalid_field(
            "status",
            "must be one of: pending, resolved, dismissed",
        )
        .into());
    }
    let report = ReportedListingRepo::set_status(&state.pool, id, &body.status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ReportedListing",
            id,
        })?;
    Ok(Json(report))
}
