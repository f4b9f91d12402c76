//! Premium purchase transaction model and DTOs.

use basera_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Transaction lifecycle states. Transitions are one-way: `pending`
/// reaches exactly one of `completed` or `failed` and stays there.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// A row from the `premium_transactions` table.
///
/// The row is the durable handoff token between the initiate and complete
/// requests; completion may arrive on a different connection.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PremiumTransaction {
    pub id: DbId,
    /// Caller-facing identifier (32 hex chars), unique.
    pub transaction_id: String,
    pub user_email: String,
    pub amount: i32,
    pub payment_method: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for initiating a premium purchase.
#[derive(Debug, Clone, Deserialize)]
pub struct InitiatePurchase {
    pub user_email: String,
    pub payment_method: String,
}
