//! Repository for the `reported_listings` table.

use sqlx::PgPool;

use basera_core::types::DbId;

use crate::models::reported_listing::{CreateReport, ReportedListing};

const COLUMNS: &str = "id, property_id, reported_by, reason, description, status, created_at";

pub struct ReportedListingRepo;

impl ReportedListingRepo {
    /// File a report against a property, returning the created row.
    pub async fn create(
        pool: &PgPool,
        property_id: DbId,
        input: &CreateReport,
    ) -> Result<ReportedListing, sqlx::Error> {
        let query = format!(
            "INSERT INTO reported_listings (property_id, reported_by, reason, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReportedListing>(&query)
            .bind(property_id)
            .bind(&input.reported_by)
            .bind(&input.reason)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all reports, newest first. Admin surface.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ReportedListing>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reported_listings ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ReportedListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set the moderation status (`pending` / `resolved` / `dismissed`).
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ReportedListing>, sqlx::Error> {
        let query = format!(
            "UPDATE reported_listings SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReportedListing>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
