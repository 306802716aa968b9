use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        treatment::{CreateTreatmentDto, TreatmentCreatedDto, TreatmentDto, UpdateTreatmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{Authorized, VetOrAdmin},
        model::treatment::UpdateTreatmentParam,
        service::treatment::TreatmentService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping treatment endpoints in OpenAPI documentation
pub static TREATMENT_TAG: &str = "treatment";

/// List treatment records.
///
/// Veterinarians only see records of appointments assigned to them.
#[utoipa::path(
    get,
    path = "/treatments",
    tag = TREATMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Visible treatment records", body = Vec<TreatmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
)]
pub async fn get_treatments(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let treatments = TreatmentService::new(&conn).get_visible(&caller).await?;

    let treatments_dto: Vec<TreatmentDto> =
        treatments.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(treatments_dto)))
}

#[utoipa::path(
    get,
    path = "/treatments/{record_id}",
    tag = TREATMENT_TAG,
    security(("bearer" = [])),
    params(("record_id" = i32, Path, description = "Treatment record ID")),
    responses(
        (status = 200, description = "The treatment record", body = TreatmentDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Not found or not visible", body = ErrorDto)
    ),
)]
pub async fn get_treatment(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
    Path(record_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let treatment = TreatmentService::new(&conn)
        .get_visible_by_id(&caller, record_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Treatment record not found".to_string()))?;

    Ok((StatusCode::OK, Json(treatment.into_dto())))
}

/// Record a treatment for an appointment.
///
/// # Access Control
/// - `Veterinarian` - Only for appointments assigned to them
/// - `Admin` - For any appointment
///
/// # Returns
/// - `201 Created` - Record created
/// - `400 Bad Request` - `appointment_id` missing, or the appointment already has a record
/// - `404 Not Found` - Appointment missing or not assigned to the caller
#[utoipa::path(
    post,
    path = "/treatments",
    tag = TREATMENT_TAG,
    security(("bearer" = [])),
    request_body = CreateTreatmentDto,
    responses(
        (status = 201, description = "Treatment created", body = TreatmentCreatedDto),
        (status = 400, description = "Missing appointment or duplicate record", body = ErrorDto),
        (status = 404, description = "Appointment not found or not authorized", body = ErrorDto)
    ),
)]
pub async fn create_treatment(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
    ApiJson(payload): ApiJson<CreateTreatmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let treatment = TreatmentService::new(&conn).create(&caller, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(TreatmentCreatedDto {
            message: "Treatment created".to_string(),
            record_id: treatment.record_id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/treatments/{record_id}",
    tag = TREATMENT_TAG,
    security(("bearer" = [])),
    params(("record_id" = i32, Path, description = "Treatment record ID")),
    request_body = UpdateTreatmentDto,
    responses(
        (status = 200, description = "Treatment updated", body = MessageDto),
        (status = 403, description = "Not the caller's treatment record", body = ErrorDto),
        (status = 404, description = "Treatment record not found", body = ErrorDto)
    ),
)]
pub async fn update_treatment(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
    Path(record_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateTreatmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    TreatmentService::new(&conn)
        .update(&caller, record_id, UpdateTreatmentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Treatment updated"))))
}
