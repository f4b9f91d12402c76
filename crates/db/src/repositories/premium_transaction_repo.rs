//! Repository for the `premium_transactions` table.

use sqlx::PgPool;

use crate::models::premium_transaction::{
    PremiumTransaction, STATUS_COMPLETED, STATUS_FAILED, STATUS_PENDING,
};

const COLUMNS: &str =
    "id, transaction_id, user_email, amount, payment_method, status, created_at, updated_at";

/// Provides the two-phase premium purchase persistence.
///
/// Status transitions are conditional UPDATEs on `status = 'pending'`, so
/// a transaction is finalized at most once even under concurrent
/// completion attempts.
pub struct PremiumTransactionRepo;

impl PremiumTransactionRepo {
    /// Create a pending transaction with the given caller-facing id and
    /// fixed amount.
    pub async fn create(
        pool: &PgPool,
        transaction_id: &str,
        user_email: &str,
        amount: i32,
        payment_method: &str,
    ) -> Result<PremiumTransaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO premium_transactions (transaction_id, user_email, amount, payment_method)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PremiumTransaction>(&query)
            .bind(transaction_id)
            .bind(user_email)
            .bind(amount)
            .bind(payment_method)
            .fetch_one(pool)
            .await
    }

    /// Find a transaction by its caller-facing id.
    pub async fn find_by_transaction_id(
        pool: &PgPool,
        transaction_id: &str,
    ) -> Result<Option<PremiumTransaction>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM premium_transactions WHERE transaction_id = $1");
        sqlx::query_as::<_, PremiumTransaction>(&query)
            .bind(transaction_id)
            .fetch_optional(pool)
            .await
    }

    /// Transition `pending -> completed`. Returns `None` when the
    /// transaction is missing or no longer pending.
    pub async fn mark_completed(
        pool: &PgPool,
        transaction_id: &str,
    ) -> Result<Option<PremiumTransaction>, sqlx::Error> {
        Self::finalize(pool, transaction_id, STATUS_COMPLETED).await
    }

    /// Transition `pending -> failed`. Returns `None` when the transaction
    /// is missing or no longer pending.
    pub async fn mark_failed(
        pool: &PgPool,
        transaction_id: &str,
    ) -> Result<Option<PremiumTransaction>, sqlx::Error> {
        Self::finalize(pool, transaction_id, STATUS_FAILED).await
    }

    async fn finalize(
        pool: &PgPool,
        transaction_id: &str,
        status: &str,
    ) -> Result<Option<PremiumTransaction>, sqlx::Error> {
        let query = format!(
            "UPDATE premium_transactions SET status = $2, updated_at = NOW()
             WHERE transaction_id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PremiumTransaction>(&query)
            .bind(transaction_id)
            .bind(status)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }
}
