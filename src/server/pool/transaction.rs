use sea_orm::{DatabaseTransaction, DbErr};

/// Commits `txn` when `result` is `Ok`, rolls it back otherwise, and passes `result` on.
///
/// A commit failure replaces the successful result. A rollback failure is logged and the
/// original error is kept.
pub async fn finish<T, E>(txn: DatabaseTransaction, result: Result<T, E>) -> Result<T, E>
where
    E: From<DbErr>,
{
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}
