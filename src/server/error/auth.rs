use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::auth::Role, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature, expiry or claim validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token `sub` claim is not a numeric user id.
    #[error("Token subject '{0}' is not a user id")]
    InvalidSubject(String),

    /// Authenticated caller's role is not in the route's allow-set.
    #[error("User {user_id} with role {role} denied access to a route requiring one of {allowed:?}")]
    AccessDenied {
        user_id: i32,
        role: Role,
        allowed: &'static [Role],
    },

    /// Unknown email or wrong password at login. Both produce the same response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Role string supplied at registration is not one of the known roles.
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Token could not be signed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(jsonwebtoken::errors::Error),

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `InvalidSubject` → 401 "Unauthenticated"
/// - `InvalidCredentials` → 401 "Invalid email or password"
/// - `AccessDenied` → 403 "Forbidden"
/// - `InvalidRole` → 400
/// - `TokenEncoding` / `PasswordHash` → 500 with a generic message
///
/// Rejections are logged at debug level; the client only sees the generic text.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::InvalidSubject(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Unauthenticated")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                error_response(StatusCode::FORBIDDEN, "Forbidden")
            }
            Self::InvalidRole(role) => {
                error_response(StatusCode::BAD_REQUEST, format!("Invalid role: {}", role))
            }
            err @ (Self::TokenEncoding(_) | Self::PasswordHash(_)) => {
                crate::server::error::InternalServerError(err).into_response()
            }
        }
    }
}
