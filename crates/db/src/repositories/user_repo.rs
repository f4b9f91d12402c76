//! Repository for the `users` table.

use sqlx::{PgExecutor, PgPool};

use basera_core::types::DbId;

use crate::models::user::{LoginUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, name, picture, status, is_premium, premium_start_date, property_count, \
     is_logged_in, last_login_at, last_activity_at, created_at, updated_at";

/// Provides CRUD operations for users plus the quota and premium helpers.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a user by email, creating a default (non-premium, zero-count)
    /// record on first sight. The name falls back to the email local part.
    pub async fn get_or_create(pool: &PgPool, email: &str) -> Result<User, sqlx::Error> {
        let default_name = email.split('@').next().unwrap_or(email);
        let query = format!(
            "INSERT INTO users (email, name)
             VALUES ($1, $2)
             ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(default_name)
            .fetch_one(pool)
            .await
    }

    /// Upsert on identity-provider login: stamps login/activity times,
    /// marks the user logged in, and refreshes name/picture when provided.
    pub async fn record_login(pool: &PgPool, input: &LoginUser) -> Result<User, sqlx::Error> {
        let default_name = input
            .name
            .clone()
            .unwrap_or_else(|| input.email.split('@').next().unwrap_or(&input.email).to_string());
        let query = format!(
            "INSERT INTO users (email, name, picture, is_logged_in, last_login_at, last_activity_at)
             VALUES ($1, $2, $3, TRUE, NOW(), NOW())
             ON CONFLICT (email) DO UPDATE SET
                name = COALESCE($4, users.name),
                picture = COALESCE($3, users.picture),
                is_logged_in = TRUE,
                last_login_at = NOW(),
                last_activity_at = NOW(),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&default_name)
            .bind(input.picture.as_deref())
            .bind(input.name.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Mark a user logged out. Returns `false` for unknown emails.
    pub async fn record_logout(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET is_logged_in = FALSE, updated_at = NOW() WHERE email = $1",
        )
        .bind(email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Stamp `last_activity_at`. Returns `false` for unknown emails.
    pub async fn touch_activity(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET last_activity_at = NOW(), updated_at = NOW() WHERE email = $1",
        )
        .bind(email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically claim a listing slot: increments `property_count` only if
    /// the user is premium or still below `limit`.
    ///
    /// Returns the updated row, or `None` when the quota condition failed
    /// (or the user does not exist -- callers that need to distinguish
    /// should resolve the user first). The check and the increment are one
    /// UPDATE, so two concurrent creations cannot both pass the guard at
    /// the limit.
    ///
    /// Takes an executor so the claim can run inside the same transaction
    /// as the property insert and roll back if the insert fails.
    pub async fn try_increment_property_count(
        executor: impl PgExecutor<'_>,
        email: &str,
        limit: i32,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET property_count = property_count + 1, updated_at = NOW()
             WHERE email = $1 AND (is_premium OR property_count < $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(limit)
            .fetch_optional(executor)
            .await
    }

    /// Flip the premium flag on an existing user, stamping the start date.
    /// Returns `None` for unknown emails.
    pub async fn set_premium(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET is_premium = TRUE, premium_start_date = NOW(), updated_at = NOW()
             WHERE email = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Upsert-and-activate used by the direct activation endpoint: creates
    /// the user when missing, then flips the premium flag.
    pub async fn upsert_premium(
        pool: &PgPool,
        email: &str,
        name: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        let default_name = name
            .map(str::to_string)
            .unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string());
        let query = format!(
            "INSERT INTO users (email, name, is_premium, premium_start_date)
             VALUES ($1, $2, TRUE, NOW())
             ON CONFLICT (email) DO UPDATE SET
                is_premium = TRUE,
                premium_start_date = NOW(),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(&default_name)
            .fetch_one(pool)
            .await
    }

    /// Set the account status (`active` / `suspended`). Returns `None` if
    /// no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// List all users, newest first. Admin surface.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }
}
