use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{
            AppointmentCreatedDto, AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto,
            UpdateStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AnyRole, Authorized, OwnerOrAdmin, VetOrAdmin},
        model::appointment::{CreateAppointmentParam, UpdateAppointmentParam},
        service::appointment::AppointmentService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Book an appointment.
///
/// The veterinarian must be assigned to the chosen clinic.
///
/// # Access Control
/// - `PetOwner` - Only for pets they own
/// - `Admin` - For any pet
///
/// # Returns
/// - `201 Created` - Appointment booked
/// - `400 Bad Request` - Veterinarian not assigned to the clinic
/// - `403 Forbidden` - Not the caller's pet
/// - `404 Not Found` - Pet does not exist (admins)
#[utoipa::path(
    post,
    path = "/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentCreatedDto),
        (status = 400, description = "Invalid pairing", body = ErrorDto),
        (status = 403, description = "Not the caller's pet", body = ErrorDto),
        (status = 404, description = "Pet not found", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    caller: Authorized<OwnerOrAdmin>,
    ApiJson(payload): ApiJson<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let appointment = AppointmentService::new(&conn)
        .create(&caller, CreateAppointmentParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentCreatedDto {
            message: "Appointment created".to_string(),
            appointment_id: appointment.appointment_id,
        }),
    ))
}

/// List appointments visible to the caller.
///
/// Admins see every appointment, veterinarians those assigned to them, and owners those
/// of their pets.
#[utoipa::path(
    get,
    path = "/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Visible appointments", body = Vec<AppointmentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    caller: Authorized<AnyRole>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let appointments = AppointmentService::new(&conn).get_visible(&caller).await?;

    let appointments_dto: Vec<AppointmentDto> =
        appointments.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(appointments_dto)))
}

#[utoipa::path(
    get,
    path = "/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("appointment_id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "The appointment", body = AppointmentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Not found or not visible", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    caller: Authorized<AnyRole>,
    Path(appointment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let appointment = AppointmentService::new(&conn)
        .get_visible_by_id(&caller, appointment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Set an appointment's status.
///
/// # Access Control
/// - `Veterinarian` - Only appointments assigned to them
/// - `Admin` - Any appointment
#[utoipa::path(
    put,
    path = "/appointments/{appointment_id}/status",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("appointment_id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Status missing", body = ErrorDto),
        (status = 403, description = "Not the caller's appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
    Path(appointment_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    AppointmentService::new(&conn)
        .update_status(&caller, appointment_id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Status updated"))))
}

/// Update an appointment.
///
/// Changing the clinic or the veterinarian re-checks that the resulting pair is assigned.
///
/// # Access Control
/// - `Veterinarian` - Only appointments assigned to them
/// - `Admin` - Any appointment
///
/// # Returns
/// - `200 OK` - Appointment updated
/// - `400 Bad Request` - No fields to update, or invalid pairing
/// - `403 Forbidden` - Not the caller's appointment
/// - `404 Not Found` - Appointment or new pet missing
#[utoipa::path(
    put,
    path = "/appointments/{appointment_id}",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("appointment_id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = MessageDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Not the caller's appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
    Path(appointment_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    AppointmentService::new(&conn)
        .update(
            &caller,
            appointment_id,
            UpdateAppointmentParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Appointment updated"))))
}
