use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Appointment joined with the names a client displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub appointment_id: i32,
    pub datetime: NaiveDateTime,
    pub status: String,
    pub pet_id: i32,
    pub pet_name: String,
    pub clinic_id: i32,
    pub clinic_name: String,
    pub owner_name: Option<String>,
    pub veterinarian_id: i32,
    pub license_no: String,
    pub vet_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    pub datetime: NaiveDateTime,
    /// Defaults to `scheduled`.
    pub status: Option<String>,
    pub pet_id: i32,
    pub clinic_id: i32,
    pub veterinarian_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentCreatedDto {
    pub message: String,
    pub appointment_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub status: String,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAppointmentDto {
    pub datetime: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub pet_id: Option<i32>,
    pub clinic_id: Option<i32>,
    pub veterinarian_id: Option<i32>,
}
