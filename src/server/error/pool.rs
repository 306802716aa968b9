use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum PoolError {
    /// Every connection stayed checked out for the whole acquire timeout.
    #[error("No database connection became available within {0:?}")]
    Exhausted(Duration),

    /// `acquire()` after `close()`.
    #[error("Connection pool is closed")]
    Closed,

    /// The manager could not open a connection.
    #[error("Failed to open database connection: {0}")]
    Connect(#[source] sea_orm::DbErr),

    /// Opening a connection took longer than the connect timeout.
    #[error("Opening a database connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Pool bounds that cannot be satisfied.
    #[error("Invalid pool configuration: {0}")]
    InvalidConfig(String),
}

/// Exhaustion and shutdown are transient and map to 503 so clients may retry later.
/// Connection failures are backend faults and map to an opaque 500.
impl IntoResponse for PoolError {
    fn into_response(self) -> Response {
        match self {
            Self::Exhausted(_) | Self::Closed => {
                tracing::warn!("{}", self);
                error_response(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable",
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
