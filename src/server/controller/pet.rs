use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pet::{CreatePetDto, PetCreatedDto, PetDto, UpdatePetDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AnyRole, Authorized, OwnerOrAdmin},
        model::pet::{CreatePetParam, UpdatePetParam},
        service::pet::PetService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping pet endpoints in OpenAPI documentation
pub static PET_TAG: &str = "pet";

/// Register a pet.
///
/// The caller becomes the pet's first owner.
///
/// # Access Control
/// - `PetOwner`, `Admin`
///
/// # Returns
/// - `201 Created` - Pet created
/// - `401 Unauthorized` / `403 Forbidden` - Gate rejected the caller
#[utoipa::path(
    post,
    path = "/pets",
    tag = PET_TAG,
    security(("bearer" = [])),
    request_body = CreatePetDto,
    responses(
        (status = 201, description = "Pet created", body = PetCreatedDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pet(
    State(state): State<AppState>,
    caller: Authorized<OwnerOrAdmin>,
    ApiJson(payload): ApiJson<CreatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let pet = PetService::new(&conn)
        .create(&caller, CreatePetParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PetCreatedDto {
            message: "Pet created".to_string(),
            pet_id: pet.pet_id,
        }),
    ))
}

/// List pets.
///
/// Admins see every pet, owners see the pets they are linked to.
#[utoipa::path(
    get,
    path = "/pets",
    tag = PET_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Visible pets", body = Vec<PetDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_pets(
    State(state): State<AppState>,
    caller: Authorized<OwnerOrAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let pets = PetService::new(&conn).get_visible(&caller).await?;

    let pets_dto: Vec<PetDto> = pets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(pets_dto)))
}

/// Get one pet.
///
/// Owners only see their own pets and veterinarians see none; anything else is reported
/// as not found.
#[utoipa::path(
    get,
    path = "/pets/{pet_id}",
    tag = PET_TAG,
    security(("bearer" = [])),
    params(("pet_id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "The pet", body = PetDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto)
    ),
)]
pub async fn get_pet(
    State(state): State<AppState>,
    caller: Authorized<AnyRole>,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let pet = PetService::new(&conn)
        .get_visible_by_id(&caller, pet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

    Ok((StatusCode::OK, Json(pet.into_dto())))
}

/// Update a pet.
///
/// # Access Control
/// - `PetOwner` - Only pets they own
/// - `Admin` - Any pet
///
/// # Returns
/// - `200 OK` - Pet updated
/// - `400 Bad Request` - No fields to update
/// - `403 Forbidden` - Not the caller's pet
/// - `404 Not Found` - No such pet (admins)
#[utoipa::path(
    put,
    path = "/pets/{pet_id}",
    tag = PET_TAG,
    security(("bearer" = [])),
    params(("pet_id" = i32, Path, description = "Pet ID")),
    request_body = UpdatePetDto,
    responses(
        (status = 200, description = "Pet updated", body = MessageDto),
        (status = 400, description = "No fields to update", body = ErrorDto),
        (status = 403, description = "Not the caller's pet", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto)
    ),
)]
pub async fn update_pet(
    State(state): State<AppState>,
    caller: Authorized<OwnerOrAdmin>,
    Path(pet_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdatePetDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    PetService::new(&conn)
        .update(&caller, pet_id, UpdatePetParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Pet updated"))))
}

/// Delete a pet together with its ownership links, appointments and treatment records.
#[utoipa::path(
    delete,
    path = "/pets/{pet_id}",
    tag = PET_TAG,
    security(("bearer" = [])),
    params(("pet_id" = i32, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet deleted", body = MessageDto),
        (status = 403, description = "Not the caller's pet", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto)
    ),
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    caller: Authorized<OwnerOrAdmin>,
    Path(pet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    PetService::new(&conn).delete(&caller, pet_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Pet deleted"))))
}
