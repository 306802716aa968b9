use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Violations of the clinic's consistency rules.
///
/// Raised by the validators in `service::validator` and by unique-constraint violations
/// that back them up. Conflicts map to 400 and ownership failures to 403.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Veterinarian {veterinarian_id} is not assigned to clinic {clinic_id}")]
    InvalidAssignment {
        veterinarian_id: i32,
        clinic_id: i32,
    },

    #[error("No veterinarian holds license {0}")]
    LicenseNotFound(String),

    #[error("License {0} is already registered to another user")]
    LicenseAlreadyClaimed(String),

    #[error("License {0} already exists")]
    LicenseExists(String),

    #[error("User {0} is already linked to a veterinarian")]
    UserAlreadyLinked(i32),

    #[error("Caller does not own the requested {0}")]
    NotOwner(&'static str),

    #[error("Veterinarian {veterinarian_id} already has a schedule on {day}")]
    DuplicateSchedule { veterinarian_id: i32, day: String },

    #[error("Appointment {0} already has a treatment record")]
    DuplicateTreatment(i32),

    #[error("Email {0} is already registered")]
    EmailTaken(String),

    #[error("Invalid day '{0}'")]
    InvalidDay(String),

    #[error("Invalid time '{0}'")]
    InvalidTime(String),

    #[error("time_end must be after time_start")]
    InvalidTimeRange,

    #[error("No fields to update")]
    NoFieldsToUpdate,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::InvalidAssignment { .. } => {
                "Veterinarian must be assigned to the selected clinic".to_string()
            }
            Self::LicenseNotFound(_) => "License not found".to_string(),
            Self::LicenseAlreadyClaimed(_) => {
                "This license is already registered to another user".to_string()
            }
            Self::LicenseExists(_) => "License already exists".to_string(),
            Self::UserAlreadyLinked(_) => "User is already linked to a veterinarian".to_string(),
            Self::NotOwner(resource) => {
                return error_response(
                    StatusCode::FORBIDDEN,
                    format!("You can only manage your own {}", resource),
                );
            }
            Self::DuplicateSchedule { .. } => "Schedule already exists for this day".to_string(),
            Self::DuplicateTreatment(_) => {
                "Treatment record already exists for this appointment".to_string()
            }
            Self::EmailTaken(_) => "Email already registered".to_string(),
            Self::InvalidDay(_) => format!(
                "Invalid day. Must be one of: {}",
                crate::server::util::parse::WEEKDAYS.join(", ")
            ),
            Self::InvalidTime(value) => format!("Invalid time '{}', expected HH:MM", value),
            Self::InvalidTimeRange | Self::NoFieldsToUpdate => self.to_string(),
        };

        error_response(StatusCode::BAD_REQUEST, message)
    }
}
