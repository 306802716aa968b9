use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AdminOnly, AllowedRoles, AnyRole, AuthGuard, OwnerOrAdmin, VetOrAdmin},
        service::auth::token::TokenService,
    },
};

mod require;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::minutes(15))
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
