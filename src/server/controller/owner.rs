use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        owner::{CreateOwnerDto, OwnerCreatedDto, OwnerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AdminOnly, Authorized, OwnerOrAdmin},
        service::owner::OwnerService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping ownership endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// List every ownership link with owner and pet names.
#[utoipa::path(
    get,
    path = "/owners",
    tag = OWNER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Ownership links", body = Vec<OwnerDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admins only", body = ErrorDto)
    ),
)]
pub async fn get_owners(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let owners = OwnerService::new(&conn).get_all().await?;

    let owners_dto: Vec<OwnerDto> = owners.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(owners_dto)))
}

/// Link a user to a pet as owner.
///
/// # Access Control
/// - `PetOwner` - Only themselves, and only to a pet with no other owner
/// - `Admin` - Any user to any pet; `user_id` is required
///
/// # Returns
/// - `201 Created` - Link created
/// - `400 Bad Request` - Link already exists, or admin omitted `user_id`
/// - `403 Forbidden` - Owner linking someone else or someone else's pet
/// - `404 Not Found` - User or pet missing
#[utoipa::path(
    post,
    path = "/owners",
    tag = OWNER_TAG,
    security(("bearer" = [])),
    request_body = CreateOwnerDto,
    responses(
        (status = 201, description = "Owner record created", body = OwnerCreatedDto),
        (status = 400, description = "Invalid link", body = ErrorDto),
        (status = 403, description = "Not allowed to link", body = ErrorDto),
        (status = 404, description = "User or pet not found", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    caller: Authorized<OwnerOrAdmin>,
    ApiJson(payload): ApiJson<CreateOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let owner = OwnerService::new(&conn).create(&caller, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(OwnerCreatedDto {
            message: "Owner record created".to_string(),
            owner_id: owner.owner_id,
        }),
    ))
}
