//! User entity model and DTOs.

use basera_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// `property_count` is the monotonic "ever listed" counter consulted by
/// the quota guard; it is never decremented.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub status: String,
    pub is_premium: bool,
    pub premium_start_date: Option<Timestamp>,
    pub property_count: i32,
    pub is_logged_in: bool,
    pub last_login_at: Option<Timestamp>,
    pub last_activity_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the identity-provider login touchpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}
