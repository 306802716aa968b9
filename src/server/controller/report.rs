use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        report::{ClinicCountDto, StatusCountDto, TreatmentReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AdminOnly, Authorized},
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Number of appointments per status.
#[utoipa::path(
    get,
    path = "/reports/appointments/status",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Counts by status", body = Vec<StatusCountDto>),
        (status = 403, description = "Admins only", body = ErrorDto)
    ),
)]
pub async fn appointment_status_report(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let counts = ReportService::new(&conn).appointment_status_counts().await?;

    let counts_dto: Vec<StatusCountDto> = counts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(counts_dto)))
}

/// Number of appointments per clinic.
#[utoipa::path(
    get,
    path = "/reports/appointments/clinic",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Counts by clinic", body = Vec<ClinicCountDto>),
        (status = 403, description = "Admins only", body = ErrorDto)
    ),
)]
pub async fn appointment_clinic_report(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let counts = ReportService::new(&conn).appointment_clinic_counts().await?;

    let counts_dto: Vec<ClinicCountDto> = counts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(counts_dto)))
}

/// Every treatment record with its pet and veterinarian.
#[utoipa::path(
    get,
    path = "/reports/treatments",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Treatment report", body = Vec<TreatmentReportDto>),
        (status = 403, description = "Admins only", body = ErrorDto)
    ),
)]
pub async fn treatment_report(
    State(state): State<AppState>,
    _caller: Authorized<AdminOnly>,
) -> Result<impl IntoResponse, AppError> {
    let conn = state.pool.acquire().await?;
    let rows = ReportService::new(&conn).treatment_report().await?;

    let rows_dto: Vec<TreatmentReportDto> = rows.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rows_dto)))
}
