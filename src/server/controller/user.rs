use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UserDto, UserSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AdminOnly, Authorized},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// GET /users - List every account with its role
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK`: JSON array of UserSummaryDto
/// - `403 Forbidden`: Caller is not an admin
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserSummaryDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admins only", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let users = UserService::new(&conn).get_all().await?;

    let users_dto: Vec<UserSummaryDto> = users.into_iter().map(|u| u.into_summary_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /users/{user_id} - Get one account with its role and contact details
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK`: UserDto
/// - `404 Not Found`: No such user
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 403, description = "Admins only", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let user = UserService::new(&conn).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
