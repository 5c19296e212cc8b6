//! Transaction helpers shared by the repositories.

use crate::error::AppError;
use sqlx::postgres::PgTransaction;
use sqlx::PgPool;

/// Begin a new database transaction.
pub async fn begin_transaction(db: &PgPool) -> Result<PgTransaction<'_>, AppError> {
    db.begin().await.map_err(|e| AppError::Storage(e.into()))
}

/// Commit a transaction, making all writes within it visible.
pub async fn commit_transaction(tx: PgTransaction<'_>) -> Result<(), AppError> {
    tx.commit().await.map_err(|e| AppError::Storage(e.into()))
}
