use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::{HealthDto, PoolStatusDto},
    server::state::AppState,
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe with a snapshot of the connection pool.
///
/// Never touches the database, so it stays responsive while the pool is exhausted.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up", body = HealthDto),
        (status = 503, description = "Pool is closed", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.pool.status();
    let (code, label) = if state.pool.is_closed() {
        (StatusCode::SERVICE_UNAVAILABLE, "closing")
    } else {
        (StatusCode::OK, "ok")
    };

    (
        code,
        Json(HealthDto {
            status: label.to_string(),
            pool: PoolStatusDto {
                total_opened: status.total_opened,
                acquired: status.acquired,
                idle: status.idle,
                max_size: status.max_size,
            },
        }),
    )
}
