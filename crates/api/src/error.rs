use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use basera_core::error::CoreError;
use basera_core::quota::FREE_PROPERTY_LIMIT;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `basera_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::UserNotFound { email } => (
                    StatusCode::NOT_FOUND,
                    "USER_NOT_FOUND",
                    format!("User {email} not found"),
                ),
                CoreError::TransactionNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "TRANSACTION_NOT_FOUND",
                    format!("Transaction {id} not found"),
                ),
                CoreError::Validation(_) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                ),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::QuotaExceeded { .. } => (
                    StatusCode::FORBIDDEN,
                    "QUOTA_EXCEEDED",
                    format!(
                        "You have reached the maximum number of free property \
                         listings ({FREE_PROPERTY_LIMIT}). Please upgrade to premium \
                         to post more properties."
                    ),
                ),
                CoreError::WishlistFull { limit, .. } => (
                    StatusCode::CONFLICT,
                    "WISHLIST_FULL",
                    format!("Wishlist limit reached (maximum {limit} properties allowed)"),
                ),
                CoreError::AlreadyExists(msg) => {
                    (StatusCode::CONFLICT, "ALREADY_EXISTS", msg.clone())
                }
                CoreError::AlreadySold => (
                    StatusCode::CONFLICT,
                    "ALREADY_SOLD",
                    "Property is already marked as sold".to_string(),
                ),
                CoreError::AlreadyCompleted => (
                    StatusCode::CONFLICT,
                    "ALREADY_COMPLETED",
                    "Transaction already completed".to_string(),
                ),
                CoreError::AlreadyPremium => (
                    StatusCode::CONFLICT,
                    "ALREADY_PREMIUM",
                    "User is already a premium member".to_string(),
                ),
                CoreError::PaymentFailed => (
                    StatusCode::PAYMENT_REQUIRED,
                    "PAYMENT_FAILED",
                    "Payment failed".to_string(),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });

        // Variants that carry structured detail for the caller's UI.
        match &self {
            AppError::Core(CoreError::Validation(violations)) => {
                body["fields"] = json!(violations);
            }
            AppError::Core(CoreError::QuotaExceeded { count, limit }) => {
                body["property_count"] = json!(count);
                body["max_free_properties"] = json!(limit);
                body["is_premium"] = json!(false);
            }
            AppError::Core(CoreError::WishlistFull { count, limit }) => {
                body["count"] = json!(count);
                body["limit"] = json!(limit);
            }
            _ => {}
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
