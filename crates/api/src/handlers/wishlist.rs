//! Handlers for the `/wishlist` resource.
//!
//! The wishlist is bounded (3 entries per user) and duplicate-free. The
//! add path is a single guarded insert backed by the composite unique
//! constraint, so neither limit can be raced past; capacity is classified
//! before duplication when both conditions hold.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use basera_core::error::CoreError;
use basera_core::quota::WISHLIST_CAPACITY;
use basera_core::types::{DbId, Timestamp};
use basera_db::models::property::Property;
use basera_db::models::wishlist::AddWishlistEntry;
use basera_db::repositories::wishlist_repo::AddOutcome;
use basera_db::repositories::{PropertyRepo, WishlistRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// A wishlist entry joined with its property, as returned by the list
/// endpoint. Entries whose property has been deleted are filtered out.
#[derive(Debug, Serialize)]
pub struct WishlistItem {
    pub id: DbId,
    pub added_at: Timestamp,
    pub property: Property,
}

/// POST /api/v1/wishlist
pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<AddWishlistEntry>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let outcome = WishlistRepo::add(
        &state.pool,
        &input.user_email,
        input.property_id,
        WISHLIST_CAPACITY,
    )
    .await?;

    let entry = match outcome {
        AddOutcome::Added(entry) => entry,
        AddOutcome::Full(count) => {
            return Err(CoreError::WishlistFull {
                count,
                limit: WISHLIST_CAPACITY,
            }
            .into());
        }
        AddOutcome::Duplicate => {
            return Err(CoreError::AlreadyExists(
                "Property already in wishlist".to_string(),
            )
            .into());
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Property added to wishlist",
            "entry": entry,
        })),
    ))
}

/// DELETE /api/v1/wishlist/{user_email}/{property_id}
///
/// Removal is not idempotent: removing an absent pair is 404, matching
/// the original surface.
pub async fn remove(
    State(state): State<AppState>,
    Path((user_email, property_id)): Path<(String, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    let removed = WishlistRepo::remove(&state.pool, &user_email, property_id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "WishlistEntry",
            id: property_id,
        }
        .into());
    }
    Ok(Json(serde_json::json!({
        "message": "Property removed from wishlist",
    })))
}

/// GET /api/v1/wishlist/{user_email}/{property_id}
///
/// Pure membership check; never fails.
pub async fn check(
    State(state): State<AppState>,
    Path((user_email, property_id)): Path<(String, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    let is_in_wishlist = WishlistRepo::contains(&state.pool, &user_email, property_id).await?;
    Ok(Json(serde_json::json!({ "is_in_wishlist": is_in_wishlist })))
}

/// GET /api/v1/wishlist/{user_email}
///
/// Entries newest-added first, joined with their properties. Orphaned
/// entries (property deleted since) are excluded rather than erroring.
pub async fn list(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> AppResult<Json<Vec<WishlistItem>>> {
    let entries = WishlistRepo::list_for_user(&state.pool, &user_email).await?;

    let ids: Vec<DbId> = entries.iter().map(|e| e.property_id).collect();
    let mut properties: std::collections::HashMap<DbId, Property> =
        PropertyRepo::find_by_ids(&state.pool, &ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

    let items = entries
        .into_iter()
        .filter_map(|entry| {
            properties.remove(&entry.property_id).map(|property| WishlistItem {
                id: entry.id,
                added_at: entry.added_at,
                property,
            })
        })
        .collect();

    Ok(Json(items))
}
