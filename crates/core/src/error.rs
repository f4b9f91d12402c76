use serde::Serialize;

use crate::types::DbId;

/// A single violated field from the one-pass listing validation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Property limit reached: {count} of {limit} free listings used")]
    QuotaExceeded { count: i32, limit: i32 },

    #[error("Wishlist limit reached: {count} of {limit} entries used")]
    WishlistFull { count: i64, limit: i64 },

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Property is already marked as sold")]
    AlreadySold,

    #[error("Transaction already completed")]
    AlreadyCompleted,

    #[error("User is already a premium member")]
    AlreadyPremium,

    #[error("Payment failed")]
    PaymentFailed,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `Validation` error from a single violation.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldViolation {
            field,
            message: message.into(),
        }])
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
