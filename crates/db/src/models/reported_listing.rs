//! Reported listing (moderation) model and DTOs.

use basera_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reported_listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportedListing {
    pub id: DbId,
    pub property_id: DbId,
    /// Email of the reporting user.
    pub reported_by: String,
    pub reason: String,
    pub description: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for filing a report against a property.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReport {
    pub reported_by: String,
    pub reason: String,
    pub description: String,
}
