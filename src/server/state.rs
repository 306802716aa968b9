//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - The bounded database connection pool
//! - The token service used by the authorization gate and login

use sea_orm::DatabaseConnection;

use crate::server::{pool::ConnectionPool, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `ConnectionPool` is an `Arc` around the shared bookkeeping
/// - `TokenService` holds the prepared signing keys
#[derive(Clone)]
pub struct AppState {
    /// Connection pool handing out one scoped connection per request.
    pub pool: ConnectionPool<DatabaseConnection>,

    /// Issues and verifies access tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `pool` - Database connection pool
    /// - `tokens` - Token service built from the configured secret and lifetime
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(pool: ConnectionPool<DatabaseConnection>, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }
}
