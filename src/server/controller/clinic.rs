use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        clinic::{ClinicCreatedDto, ClinicDto, ClinicPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AdminOnly, AnyRole, Authorized},
        model::clinic::ClinicParam,
        service::clinic::ClinicService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping clinic endpoints in OpenAPI documentation
pub static CLINIC_TAG: &str = "clinic";

#[utoipa::path(
    get,
    path = "/clinics",
    tag = CLINIC_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All clinics", body = Vec<ClinicDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_clinics(
    State(state): State<AppState>,
    _caller: Authorized<AnyRole>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let clinics = ClinicService::new(&conn).get_all().await?;

    let clinics_dto: Vec<ClinicDto> = clinics.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(clinics_dto)))
}

#[utoipa::path(
    get,
    path = "/clinics/{clinic_id}",
    tag = CLINIC_TAG,
    security(("bearer" = [])),
    params(("clinic_id" = i32, Path, description = "Clinic ID")),
    responses(
        (status = 200, description = "The clinic", body = ClinicDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto)
    ),
)]
pub async fn get_clinic(
    State(state): State<AppState>,
    _caller: Authorized<AnyRole>,
    Path(clinic_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let clinic = ClinicService::new(&conn).get_by_id(clinic_id).await?;

    Ok((StatusCode::OK, Json(clinic.into_dto())))
}

/// Create a clinic.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/clinics",
    tag = CLINIC_TAG,
    security(("bearer" = [])),
    request_body = ClinicPayloadDto,
    responses(
        (status = 201, description = "Clinic created", body = ClinicCreatedDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Admins only", body = ErrorDto)
    ),
)]
pub async fn create_clinic(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
    ApiJson(payload): ApiJson<ClinicPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let clinic = ClinicService::new(&conn)
        .create(ClinicParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ClinicCreatedDto {
            message: "Clinic created".to_string(),
            clinic_id: clinic.clinic_id,
        }),
    ))
}

/// Replace a clinic's name, phone number and address.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/clinics/{clinic_id}",
    tag = CLINIC_TAG,
    security(("bearer" = [])),
    params(("clinic_id" = i32, Path, description = "Clinic ID")),
    request_body = ClinicPayloadDto,
    responses(
        (status = 200, description = "Clinic updated", body = MessageDto),
        (status = 403, description = "Admins only", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto)
    ),
)]
pub async fn update_clinic(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
    Path(clinic_id): Path<i32>,
    ApiJson(payload): ApiJson<ClinicPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    ClinicService::new(&conn)
        .replace(clinic_id, ClinicParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Clinic updated"))))
}
