use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, ProfileDto, RegisterDto, RegisteredDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AnyRole, Authorized},
        model::auth::RegisterParam,
        service::auth::AuthService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the requested role (pet owner when omitted). Veterinarians must
/// name an existing unclaimed license and the clinic they practice at; the license is
/// claimed and the clinic assigned in the same transaction as the account.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid role, missing fields, email taken, license unknown or claimed
/// - `404 Not Found` - Clinic does not exist
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisteredDto),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::from_dto(payload)?;

    let conn = state.pool.acquire().await?;
    let user_id = AuthService::new(&conn, &state.tokens)
        .register(param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredDto {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// Log in with email and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Access token with the caller's role and name
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Email and password required", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let session = AuthService::new(&conn, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Claims of the caller's access token.
#[utoipa::path(
    get,
    path = "/profile",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token claims", body = ProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn profile(caller: Authorized<AnyRole>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(caller.identity().into_dto())))
}
