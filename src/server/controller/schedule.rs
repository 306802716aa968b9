use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        schedule::{CreateScheduleDto, ScheduleCreatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::{Authorized, VetOrAdmin},
        model::schedule::CreateScheduleParam,
        service::schedule::ScheduleService,
        state::AppState,
        util::json::ApiJson,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Add a weekly schedule entry.
///
/// # Access Control
/// - `Veterinarian` - Only for their own license
/// - `Admin` - For any veterinarian
///
/// # Returns
/// - `201 Created` - Entry created
/// - `400 Bad Request` - Invalid day or time, or the day is already scheduled
/// - `403 Forbidden` - Veterinarian adding to another veterinarian
/// - `404 Not Found` - Veterinarian does not exist
#[utoipa::path(
    post,
    path = "/veterinarian-schedules",
    tag = SCHEDULE_TAG,
    security(("bearer" = [])),
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleCreatedDto),
        (status = 400, description = "Invalid or duplicate schedule", body = ErrorDto),
        (status = 403, description = "Not the caller's schedule", body = ErrorDto),
        (status = 404, description = "Veterinarian not found", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    caller: Authorized<VetOrAdmin>,
    ApiJson(payload): ApiJson<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateScheduleParam::from_dto(payload)?;

    let conn = state.pool.acquire().await?;
    let schedule = ScheduleService::new(&conn).create(&caller, param).await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleCreatedDto {
            message: "Schedule created successfully".to_string(),
            schedule_id: schedule.schedule_id,
        }),
    ))
}
