//! Handlers for the `/properties` resource.
//!
//! Creation runs the one-pass listing validation, then claims a quota slot
//! with an atomic conditional increment before the row is inserted. The
//! sold transition is one-way and enforced inside a single UPDATE.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use basera_core::error::CoreError;
use basera_core::price::display_price;
use basera_core::quota::FREE_PROPERTY_LIMIT;
use basera_core::types::DbId;
use basera_core::validation::{validate_listing, ListingInput};
use basera_db::models::property::{CreateProperty, Property, PropertyFilter, UpdateProperty};
use basera_db::models::reported_listing::CreateReport;
use basera_db::repositories::{PropertyRepo, ReportedListingRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/properties
///
/// Create a listing. Fails with a field-level validation error, 404 for an
/// unknown owner, or 403 when a free-tier owner is out of quota.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_listing(&listing_input(&input))?;

    let user = UserRepo::find_by_email(&state.pool, &input.user_email)
        .await?
        .ok_or_else(|| CoreError::UserNotFound {
            email: input.user_email.clone(),
        })?;

    // Claim a quota slot and insert the row in one transaction: the
    // premium-or-below-limit check and the increment are a single UPDATE
    // (concurrent creations at the limit cannot both pass), and a failed
    // insert rolls the claim back instead of burning the slot.
    let mut tx = state.pool.begin().await?;

    let owner = UserRepo::try_increment_property_count(
        &mut *tx,
        &input.user_email,
        FREE_PROPERTY_LIMIT,
    )
    .await?
    .ok_or(CoreError::QuotaExceeded {
        count: user.property_count,
        limit: FREE_PROPERTY_LIMIT,
    })?;

    let price_string = display_price(input.price);
    let property = PropertyRepo::create(&mut *tx, &input, &price_string).await?;

    tx.commit().await?;

    tracing::info!(
        property_id = property.id,
        owner = %owner.email,
        property_count = owner.property_count,
        "Property created"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "property": property,
            "property_count": owner.property_count,
            "is_premium": owner.is_premium,
            "max_free_properties": FREE_PROPERTY_LIMIT,
        })),
    ))
}

/// GET /api/v1/properties
///
/// Public listing with conjunctive optional filters. Sold-out listings are
/// hidden unless `include_sold_out=true`.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list(&state.pool, &filter).await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id,
        })?;
    Ok(Json(property))
}

/// PUT /api/v1/properties/{id}
///
/// Owner-only partial update. The merged result is re-validated so an
/// update cannot push a listing out of the valid range, and the price
/// display string is re-derived when the price changes.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let existing = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id,
        })?;

    if existing.owner_email != input.user_email {
        return Err(CoreError::Forbidden(
            "Not authorized to update this property".to_string(),
        )
        .into());
    }

    validate_listing(&merged_input(&existing, &input))?;

    let price_string = input.price.map(display_price);
    let updated = PropertyRepo::update(&state.pool, id, &input, price_string.as_deref())
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id,
        })?;

    Ok(Json(updated))
}

/// Request body for the sold transition.
#[derive(Debug, Deserialize)]
pub struct MarkSoldRequest {
    pub user_email: String,
}

/// PUT /api/v1/properties/{id}/sold
///
/// One-way transition; a second call gets 409.
pub async fn mark_sold(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<MarkSoldRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id,
        })?;

    if existing.owner_email != body.user_email {
        return Err(CoreError::Forbidden(
            "Not authorized to update this property".to_string(),
        )
        .into());
    }

    // Zero rows here means another caller won the transition.
    let property = PropertyRepo::mark_sold(&state.pool, id)
        .await?
        .ok_or(CoreError::AlreadySold)?;

    tracing::info!(property_id = id, owner = %body.user_email, "Property marked sold");

    Ok(Json(serde_json::json!({
        "message": "Property marked as sold successfully",
        "property": property,
    })))
}

/// GET /api/v1/properties/my-listings/{user_email}
///
/// The owner's listings, newest first, including sold/disabled ones.
pub async fn my_listings(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list_by_owner(&state.pool, &user_email).await?;
    Ok(Json(properties))
}

/// POST /api/v1/properties/{id}/report
///
/// File a moderation report against a listing.
pub async fn report(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if input.reason.trim().is_empty() {
        return Err(CoreError::invalid_field("reason", "is required").into());
    }
    if input.description.trim().is_empty() {
        return Err(CoreError::invalid_field("description", "is required").into());
    }

    if PropertyRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }));
    }

    let report = ReportedListingRepo::create(&state.pool, id, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Report submitted",
            "report": report,
        })),
    ))
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Borrow the validated fields out of a create request.
fn listing_input(input: &CreateProperty) -> ListingInput<'_> {
    ListingInput {
        title: &input.title,
        price: input.price,
        details: &input.details,
        location: &input.location,
        size: input.size,
        bedrooms: input.bedrooms,
        bathrooms: input.bathrooms,
        description: &input.description,
        images: &input.images,
        contact_name: &input.contact_name,
        contact_email: &input.contact_email,
        contact_phone: &input.contact_phone,
        listing_type: &input.listing_type,
        property_type: &input.property_type,
    }
}

/// View of a property as it would look after applying the update, for
/// re-validation before anything is written.
fn merged_input<'a>(existing: &'a Property, update: &'a UpdateProperty) -> ListingInput<'a> {
    ListingInput {
        title: update.title.as_deref().unwrap_or(&existing.title),
        price: update.price.unwrap_or(existing.price),
        details: update.details.as_deref().unwrap_or(&existing.details),
        location: update.location.as_deref().unwrap_or(&existing.location),
        size: update.size.unwrap_or(existing.size),
        bedrooms: update.bedrooms.unwrap_or(existing.bedrooms),
        bathrooms: update.bathrooms.unwrap_or(existing.bathrooms),
        description: update
            .description
            .as_deref()
            .unwrap_or(&existing.description),
        images: update.images.as_deref().unwrap_or(&existing.images),
        contact_name: update
            .contact_name
            .as_deref()
            .unwrap_or(&existing.contact_name),
        contact_email: update
            .contact_email
            .as_deref()
            .unwrap_or(&existing.contact_email),
        contact_phone: update
            .contact_phone
            .as_deref()
            .unwrap_or(&existing.contact_phone),
        listing_type: update
            .listing_type
            .as_deref()
            .unwrap_or(&existing.listing_type),
        property_type: update
            .property_type
            .as_deref()
            .unwrap_or(&existing.property_type),
    }
}
