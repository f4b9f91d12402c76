//! Handlers for the `/premium` resource.
//!
//! The purchase is a two-phase state machine. `initiate` writes a pending
//! transaction row -- the durable token between the two requests -- and
//! `complete` finalizes it exactly once: `pending` reaches `completed` or
//! `failed` and stays there. A failed transaction is terminal; the caller
//! must initiate a fresh purchase.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use basera_core::error::CoreError;
use basera_core::quota::PREMIUM_AMOUNT;
use basera_db::models::premium_transaction::{
    InitiatePurchase, STATUS_COMPLETED, STATUS_FAILED,
};
use basera_db::repositories::{PremiumTransactionRepo, UserRepo};

use crate::error::AppResult;
use crate::state::AppState;

const PAYMENT_METHODS: &[&str] = &["card", "googlepay"];

/// POST /api/v1/premium/purchase/initiate
pub async fn initiate(
    State(state): State<AppState>,
    Json(input): Json<InitiatePurchase>,
) -> AppResult<Json<serde_json::Value>> {
    if !PAYMENT_METHODS.contains(&input.payment_method.as_str()) {
        return Err(
            CoreError::invalid_field("payment_method", "must be one of: card, googlepay").into(),
        );
    }

    let user = UserRepo::find_by_email(&state.pool, &input.user_email)
        .await?
        .ok_or_else(|| CoreError::UserNotFound {
            email: input.user_email.clone(),
        })?;

    if user.is_premium {
        return Err(CoreError::AlreadyPremium.into());
    }

    let transaction_id = Uuid::new_v4().simple().to_string();
    let transaction = PremiumTransactionRepo::create(
        &state.pool,
        &transaction_id,
        &input.user_email,
        PREMIUM_AMOUNT,
        &input.payment_method,
    )
    .await?;

    tracing::info!(
        transaction_id = %transaction.transaction_id,
        user = %input.user_email,
        "Premium purchase initiated"
    );

    Ok(Json(serde_json::json!({
        "message": "Premium purchase initiated",
        "transaction_id": transaction.transaction_id,
        "amount": transaction.amount,
    })))
}

/// Request body for the completion phase. `payment_details` is opaque to
/// the simulator and accepted for interface fidelity only.
#[derive(Debug, Deserialize)]
pub struct CompletePurchaseRequest {
    pub transaction_id: String,
    #[allow(dead_code)]
    pub payment_details: Option<serde_json::Value>,
}

/// POST /api/v1/premium/purchase/complete
///
/// May arrive on a different connection than `initiate`; the transaction
/// row carries all the state needed.
pub async fn complete(
    State(state): State<AppState>,
    Json(input): Json<CompletePurchaseRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let transaction =
        PremiumTransactionRepo::find_by_transaction_id(&state.pool, &input.transaction_id)
            .await?
            .ok_or_else(|| CoreError::TransactionNotFound(input.transaction_id.clone()))?;

    match transaction.status.as_str() {
        STATUS_COMPLETED => return Err(CoreError::AlreadyCompleted.into()),
        STATUS_FAILED => {
            return Err(CoreError::Conflict(
                "Transaction already failed; initiate a new purchase".to_string(),
            )
            .into());
        }
        _ => {}
    }

    let authorized = state
        .payment_gateway
        .authorize(transaction.amount, &transaction.payment_method)
        .await;

    if !authorized {
        // Conditional on still-pending; zero rows means another request
        // finalized the transaction while we were authorizing.
        if PremiumTransactionRepo::mark_failed(&state.pool, &input.transaction_id)
            .await?
            .is_none()
        {
            return Err(CoreError::AlreadyCompleted.into());
        }
        tracing::warn!(
            transaction_id = %input.transaction_id,
            "Payment authorization declined"
        );
        return Err(CoreError::PaymentFailed.into());
    }

    let completed = PremiumTransactionRepo::mark_completed(&state.pool, &input.transaction_id)
        .await?
        .ok_or(CoreError::AlreadyCompleted)?;

    let user = UserRepo::set_premium(&state.pool, &completed.user_email)
        .await?
        .ok_or_else(|| CoreError::UserNotFound {
            email: completed.user_email.clone(),
        })?;

    tracing::info!(
        transaction_id = %input.transaction_id,
        user = %user.email,
        "Premium purchase completed"
    );

    Ok(Json(serde_json::json!({
        "message": "Premium purchase completed successfully",
        "premium_status": {
            "is_premium": user.is_premium,
            "premium_start_date": user.premium_start_date,
        },
    })))
}

/// Request body for the direct activation endpoint.
#[derive(Debug, Deserialize)]
pub struct ActivatePremiumRequest {
    pub user_email: String,
    pub name: Option<String>,
}

/// POST /api/v1/premium/activate
///
/// Direct activation without the simulated payment, creating the user on
/// first sight. Retained from the original surface.
pub async fn activate(
    State(state): State<AppState>,
    Json(input): Json<ActivatePremiumRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user =
        UserRepo::upsert_premium(&state.pool, &input.user_email, input.name.as_deref()).await?;

    tracing::info!(user = %user.email, "Premium activated directly");

    Ok(Json(serde_json::json!({
        "message": "Premium activated successfully",
    })))
}

/// GET /api/v1/premium/status/{user_email}
///
/// Auto-creates a default user record on first sight, so the front end
/// can poll status before any other interaction.
pub async fn status(
    State(state): State<AppState>,
    Path(user_email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::get_or_create(&state.pool, &user_email).await?;

    Ok(Json(serde_json::json!({
        "is_premium": user.is_premium,
        "property_count": user.property_count,
        "premium_start_date": user.premium_start_date,
    })))
}
