use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Opens, checks and closes the connections a pool hands out.
#[async_trait]
pub trait ConnectionManager: Send + Sync {
    type Connection: Send + 'static;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Self::Connection, DbErr>;

    /// Round-trips to the server to confirm an idle connection still works.
    async fn is_valid(&self, conn: &Self::Connection) -> bool;

    /// Cheap local check run on every release. Broken connections are closed, not pooled.
    fn has_broken(&self, conn: &Self::Connection) -> bool;

    /// Closes a connection that leaves the pool.
    async fn close(&self, conn: Self::Connection);
}

/// Opens single-connection SeaORM handles for the configured database URL.
///
/// Each pooled `DatabaseConnection` wraps exactly one driver connection so the outer pool
/// alone decides how many are open.
pub struct SeaOrmConnector {
    url: String,
    connect_timeout: Duration,
}

impl SeaOrmConnector {
    pub fn new(url: impl Into<String>, connect_timeout: Duration) -> Self {
        Self {
            url: url.into(),
            connect_timeout,
        }
    }
}

#[async_trait]
impl ConnectionManager for SeaOrmConnector {
    type Connection = DatabaseConnection;

    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(false);

        Database::connect(options).await
    }

    async fn is_valid(&self, conn: &DatabaseConnection) -> bool {
        conn.ping().await.is_ok()
    }

    fn has_broken(&self, _conn: &DatabaseConnection) -> bool {
        // sqlx reconnects a dropped socket inside the handle, so nothing to detect locally
        false
    }

    async fn close(&self, conn: DatabaseConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!("Failed to close database connection: {}", e);
        }
    }
}

/// Hands out clones of one existing connection. Lets handler tests run the full pool
/// against an in-memory SQLite database whose tables live on that one connection.
#[cfg(test)]
pub struct SharedConnection(pub DatabaseConnection);

#[cfg(test)]
#[async_trait]
impl ConnectionManager for SharedConnection {
    type Connection = DatabaseConnection;

    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Ok(self.0.clone())
    }

    async fn is_valid(&self, _conn: &DatabaseConnection) -> bool {
        true
    }

    fn has_broken(&self, _conn: &DatabaseConnection) -> bool {
        false
    }

    async fn close(&self, _conn: DatabaseConnection) {}
}
