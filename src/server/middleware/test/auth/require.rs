use super::*;

/// Tests a token whose role is in the allow-set.
///
/// Expected: Ok(Identity) carrying the token's user id and role
#[test]
fn allows_listed_role() {
    let tokens = tokens();
    let headers = bearer(&tokens.issue(7, Role::PetOwner).unwrap());

    let identity = AuthGuard::new(&tokens, &headers)
        .require(OwnerOrAdmin::ROLES)
        .unwrap();

    assert_eq!(identity.user_id, 7);
    assert_eq!(identity.role, Role::PetOwner);
}

/// Tests a request with no Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(AnyRole::ROLES);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an Authorization header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let tokens = tokens();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&tokens, &headers).require(AnyRole::ROLES);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_signature() {
    let tokens = tokens();
    let forged = TokenService::new("other-secret", Duration::minutes(15))
        .issue(1, Role::Admin)
        .unwrap();
    let headers = bearer(&forged);

    let result = AuthGuard::new(&tokens, &headers).require(AdminOnly::ROLES);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_expired_token() {
    let tokens = tokens();
    let expired = TokenService::new("test-secret", Duration::minutes(-5))
        .issue(1, Role::Admin)
        .unwrap();
    let headers = bearer(&expired);

    let result = AuthGuard::new(&tokens, &headers).require(AdminOnly::ROLES);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests a valid token whose role is outside the allow-set.
///
/// Expected: Err(AuthError::AccessDenied) naming the caller and their role
#[test]
fn denies_unlisted_role() {
    let tokens = tokens();
    let headers = bearer(&tokens.issue(3, Role::PetOwner).unwrap());

    let result = AuthGuard::new(&tokens, &headers).require(VetOrAdmin::ROLES);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { user_id: 3, role: Role::PetOwner, .. }))
    ));
}

/// Tests that every role passes the any-role set and only admins pass the admin set.
///
/// Expected: AnyRole accepts all three roles, AdminOnly accepts only Admin
#[test]
fn role_sets_match_route_table() {
    let tokens = tokens();

    for role in Role::ALL {
        let headers = bearer(&tokens.issue(1, role).unwrap());
        let guard = AuthGuard::new(&tokens, &headers);

        assert!(guard.require(AnyRole::ROLES).is_ok());
        assert_eq!(guard.require(AdminOnly::ROLES).is_ok(), role == Role::Admin);
    }
}
