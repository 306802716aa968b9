//! Bearer-token authentication and role gating.
//!
//! Handlers declare the roles they accept in their signature through
//! [`Authorized<R>`]. Extraction verifies the token and checks the role before the
//! handler body runs, so a rejected request never reaches the database.

use std::{marker::PhantomData, ops::Deref};

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::auth::Identity,
        service::auth::token::TokenService,
        state::AppState,
    },
};

/// A compile-time set of roles allowed on a route.
pub trait AllowedRoles {
    const ROLES: &'static [Role];
}

/// Any authenticated user.
pub struct AnyRole;

pub struct AdminOnly;

pub struct OwnerOrAdmin;

pub struct VetOrAdmin;

impl AllowedRoles for AnyRole {
    const ROLES: &'static [Role] = &Role::ALL;
}

impl AllowedRoles for AdminOnly {
    const ROLES: &'static [Role] = &[Role::Admin];
}

impl AllowedRoles for OwnerOrAdmin {
    const ROLES: &'static [Role] = &[Role::PetOwner, Role::Admin];
}

impl AllowedRoles for VetOrAdmin {
    const ROLES: &'static [Role] = &[Role::Veterinarian, Role::Admin];
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Verifies the bearer token and requires its role to be one of `allowed`.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Authenticated caller with an allowed role
    /// - `Err(AuthError::MissingToken)` - No bearer token
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or malformed claims
    /// - `Err(AuthError::AccessDenied)` - Role not in `allowed`
    pub fn require(&self, allowed: &'static [Role]) -> Result<Identity, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify(token)?;
        let identity = Identity::from_claims(claims)?;

        if !allowed.contains(&identity.role) {
            return Err(AuthError::AccessDenied {
                user_id: identity.user_id,
                role: identity.role,
                allowed,
            }
            .into());
        }

        Ok(identity)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }

        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}

/// The verified caller of a route restricted to the roles in `R`.
pub struct Authorized<R: AllowedRoles> {
    identity: Identity,
    _roles: PhantomData<fn() -> R>,
}

impl<R: AllowedRoles> Authorized<R> {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl<R: AllowedRoles> Deref for Authorized<R> {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

impl<R: AllowedRoles> FromRequestParts<AppState> for Authorized<R> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = AuthGuard::new(&state.tokens, &parts.headers).require(R::ROLES)?;

        Ok(Self {
            identity,
            _roles: PhantomData,
        })
    }
}
