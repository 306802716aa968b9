use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    pool::{ConnectionPool, SeaOrmConnector},
};

/// Builds the connection pool and runs pending migrations.
///
/// Opens `min_size` connections using the URL from configuration, then checks one out to
/// bring the schema up to date. This function must complete successfully before the
/// application can serve requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool bounds
///
/// # Returns
/// - `Ok(ConnectionPool)` - Ready pool with migrations applied
/// - `Err(AppError::PoolErr)` - Invalid bounds or the database was unreachable
/// - `Err(AppError::DbErr)` - A migration failed
pub async fn connect_to_database(
    config: &Config,
) -> Result<ConnectionPool<DatabaseConnection>, AppError> {
    let connector = SeaOrmConnector::new(&config.database_url, config.pool.connect_timeout);
    let pool = ConnectionPool::build(connector, config.pool.clone()).await?;

    tracing::info!(
        min_size = config.pool.min_size,
        max_size = config.pool.max_size,
        statement_timeout_ms = config.statement_timeout_ms,
        "Opened database connection pool"
    );

    let conn = pool.acquire().await?;
    Migrator::up(&*conn, None).await?;
    conn.release();

    Ok(pool)
}
