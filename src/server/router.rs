use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        appointment, auth, clinic, health, owner, pet, report, schedule, treatment, user,
        veterinarian,
    },
    docs::ApiDoc,
    state::AppState,
};

/// Assembles every route, the Swagger UI and the HTTP layers.
///
/// Each `routes!` call groups the handlers that share one path.
pub fn router(state: AppState) -> Router {
    let (api_router, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::profile))
        .routes(routes!(pet::create_pet, pet::get_pets))
        .routes(routes!(pet::get_pet, pet::update_pet, pet::delete_pet))
        .routes(routes!(owner::get_owners, owner::create_owner))
        .routes(routes!(clinic::get_clinics, clinic::create_clinic))
        .routes(routes!(clinic::get_clinic, clinic::update_clinic))
        .routes(routes!(
            veterinarian::get_veterinarians,
            veterinarian::create_veterinarian
        ))
        .routes(routes!(veterinarian::get_veterinarian))
        .routes(routes!(veterinarian::get_clinic_veterinarians))
        .routes(routes!(veterinarian::get_veterinarian_schedules))
        .routes(routes!(schedule::create_schedule))
        .routes(routes!(
            appointment::create_appointment,
            appointment::get_appointments
        ))
        .routes(routes!(
            appointment::get_appointment,
            appointment::update_appointment
        ))
        .routes(routes!(appointment::update_appointment_status))
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_user))
        .routes(routes!(
            treatment::get_treatments,
            treatment::create_treatment
        ))
        .routes(routes!(
            treatment::get_treatment,
            treatment::update_treatment
        ))
        .routes(routes!(report::appointment_status_report))
        .routes(routes!(report::appointment_clinic_report))
        .routes(routes!(report::treatment_report))
        .split_for_parts();

    api_router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
