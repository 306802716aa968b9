//! OpenAPI document served by Swagger UI at `/docs`.
//!
//! Paths and schemas are collected from the `#[utoipa::path]` annotations on the
//! controllers when the router is assembled; this module only contributes the document
//! metadata and the bearer security scheme.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// Registers the bearer token scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /login."))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "PawPoint clinic API",
        description = "Role-based access to pets, clinics, veterinarians, appointments and treatment records."
    ),
    tags(
        (name = "auth", description = "Registration, login and token claims"),
        (name = "pet", description = "Pets and their owners' access"),
        (name = "owner", description = "Pet ownership links"),
        (name = "clinic", description = "Clinics"),
        (name = "veterinarian", description = "Veterinarian licenses and clinic assignments"),
        (name = "schedule", description = "Weekly veterinarian schedules"),
        (name = "appointment", description = "Appointment booking"),
        (name = "treatment", description = "Treatment records"),
        (name = "user", description = "User accounts"),
        (name = "report", description = "Admin reports"),
        (name = "health", description = "Liveness and pool status")
    )
)]
pub struct ApiDoc;
