use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        schedule::ScheduleDto,
        veterinarian::{CreateVeterinarianDto, VeterinarianCreatedDto, VeterinarianDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AdminOnly, AnyRole, Authorized},
        model::veterinarian::CreateVeterinarianParam,
        service::{schedule::ScheduleService, veterinarian::VeterinarianService},
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping veterinarian endpoints in OpenAPI documentation
pub static VETERINARIAN_TAG: &str = "veterinarian";

#[utoipa::path(
    get,
    path = "/veterinarians",
    tag = VETERINARIAN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All veterinarians", body = Vec<VeterinarianDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_veterinarians(
    State(state): State<AppState>,
    _caller: Authorized<AnyRole>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let vets = VeterinarianService::new(&conn).get_all().await?;

    let vets_dto: Vec<VeterinarianDto> = vets.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(vets_dto)))
}

#[utoipa::path(
    get,
    path = "/veterinarians/{veterinarian_id}",
    tag = VETERINARIAN_TAG,
    security(("bearer" = [])),
    params(("veterinarian_id" = i32, Path, description = "Veterinarian ID")),
    responses(
        (status = 200, description = "The veterinarian", body = VeterinarianDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Veterinarian not found", body = ErrorDto)
    ),
)]
pub async fn get_veterinarian(
    State(state): State<AppState>,
    _caller: Authorized<AnyRole>,
    Path(veterinarian_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let vet = VeterinarianService::new(&conn)
        .get_by_id(veterinarian_id)
        .await?;

    Ok((StatusCode::OK, Json(vet.into_dto())))
}

/// Veterinarians assigned to a clinic.
#[utoipa::path(
    get,
    path = "/veterinarians/clinic/{clinic_id}",
    tag = VETERINARIAN_TAG,
    security(("bearer" = [])),
    params(("clinic_id" = i32, Path, description = "Clinic ID")),
    responses(
        (status = 200, description = "Veterinarians at the clinic", body = Vec<VeterinarianDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto)
    ),
)]
pub async fn get_clinic_veterinarians(
    State(state): State<AppState>,
    _caller: Authorized<AnyRole>,
    Path(clinic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let vets = VeterinarianService::new(&conn)
        .get_by_clinic(clinic_id)
        .await?;

    let vets_dto: Vec<VeterinarianDto> = vets.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(vets_dto)))
}

/// Provision a veterinarian license.
///
/// The license may be linked to an existing account straight away and assigned to a
/// clinic. Unlinked licenses are claimed later through registration.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - License provisioned
/// - `400 Bad Request` - Empty or duplicate license, or user already linked
/// - `404 Not Found` - Named user or clinic missing
#[utoipa::path(
    post,
    path = "/veterinarians",
    tag = VETERINARIAN_TAG,
    security(("bearer" = [])),
    request_body = CreateVeterinarianDto,
    responses(
        (status = 201, description = "Veterinarian created", body = VeterinarianCreatedDto),
        (status = 400, description = "Invalid license", body = ErrorDto),
        (status = 403, description = "Admins only", body = ErrorDto),
        (status = 404, description = "User or clinic not found", body = ErrorDto)
    ),
)]
pub async fn create_veterinarian(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
    ApiJson(payload): ApiJson<CreateVeterinarianDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let vet = VeterinarianService::new(&conn)
        .create(CreateVeterinarianParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(VeterinarianCreatedDto {
            message: "Veterinarian created".to_string(),
            veterinarian_id: vet.veterinarian_id,
        }),
    ))
}

/// A veterinarian's weekly schedule, Monday first.
#[utoipa::path(
    get,
    path = "/veterinarians/{veterinarian_id}/schedules",
    tag = VETERINARIAN_TAG,
    security(("bearer" = [])),
    params(("veterinarian_id" = i32, Path, description = "Veterinarian ID")),
    responses(
        (status = 200, description = "Schedule entries", body = Vec<ScheduleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_veterinarian_schedules(
    State(state): State<AppState>,
    _caller: Authorized<AnyRole>,
    Path(veterinarian_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let schedules = ScheduleService::new(&conn)
        .get_for_veterinarian(veterinarian_id)
        .await?;

    let schedules_dto: Vec<ScheduleDto> = schedules.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(schedules_dto)))
}
