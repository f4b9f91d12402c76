//! Repository for the `wishlist_entries` table.

use sqlx::PgPool;

use basera_core::types::DbId;

use crate::models::wishlist::WishlistEntry;

const COLUMNS: &str = "id, user_email, property_id, added_at";

/// Result of an add attempt. The insert is a single guarded statement, so
/// concurrent adds cannot overshoot the capacity or double-insert a pair;
/// the losing statement simply inserts zero rows and is classified here.
#[derive(Debug)]
pub enum AddOutcome {
    Added(WishlistEntry),
    /// The (user, property) pair already exists.
    Duplicate,
    /// The user is at capacity; carries the current entry count.
    Full(i64),
}

/// Provides the bounded wishlist operations.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Number of live entries for a user.
    pub async fn count_for_user(pool: &PgPool, user_email: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM wishlist_entries WHERE user_email = $1",
        )
        .bind(user_email)
        .fetch_one(pool)
        .await
    }

    /// Whether the (user, property) pair is present.
    pub async fn contains(
        pool: &PgPool,
        user_email: &str,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM wishlist_entries WHERE user_email = $1 AND property_id = $2
             )",
        )
        .bind(user_email)
        .bind(property_id)
        .fetch_one(pool)
        .await
    }

    /// Guarded insert: adds the entry only while the user is below
    /// `capacity`, and relies on `uq_wishlist_user_property` for
    /// duplicates. Capacity is classified before duplication when both
    /// apply, matching the documented check order.
    pub async fn add(
        pool: &PgPool,
        user_email: &str,
        property_id: DbId,
        capacity: i64,
    ) -> Result<AddOutcome, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlist_entries (user_email, property_id)
             SELECT $1, $2
             WHERE (SELECT COUNT(*) FROM wishlist_entries WHERE user_email = $1) < $3
             ON CONFLICT (user_email, property_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, WishlistEntry>(&query)
            .bind(user_email)
            .bind(property_id)
            .bind(capacity)
            .fetch_optional(pool)
            .await?;

        if let Some(entry) = inserted {
            return Ok(AddOutcome::Added(entry));
        }

        // Zero rows: either at capacity or a duplicate pair. Duplicate is
        // only reported when the pair actually exists -- a re-count alone
        // can misclassify if a concurrent remove lands after the insert.
        // Capacity still wins the classification when both hold.
        let count = Self::count_for_user(pool, user_email).await?;
        if count < capacity && Self::contains(pool, user_email, property_id).await? {
            Ok(AddOutcome::Duplicate)
        } else {
            Ok(AddOutcome::Full(count))
        }
    }

    /// Remove an entry. Returns `false` when the pair was not present (a
    /// second remove is an error at the caller, not a silent success).
    pub async fn remove(
        pool: &PgPool,
        user_email: &str,
        property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM wishlist_entries WHERE user_email = $1 AND property_id = $2",
        )
        .bind(user_email)
        .bind(property_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All entries for a user, newest-added first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_email: &str,
    ) -> Result<Vec<WishlistEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlist_entries
             WHERE user_email = $1
             ORDER BY added_at DESC, id DESC"
        );
        sqlx::query_as::<_, WishlistEntry>(&query)
            .bind(user_email)
            .fetch_all(pool)
            .await
    }
}
