//! Appointment models.

use chrono::NaiveDateTime;

use crate::model::appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto};

/// Status given to appointments created without one.
pub const DEFAULT_STATUS: &str = "scheduled";

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub appointment_id: i32,
    pub datetime: NaiveDateTime,
    pub status: String,
    pub pet_id: i32,
    pub clinic_id: i32,
    pub veterinarian_id: i32,
}

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            appointment_id: entity.appointment_id,
            datetime: entity.datetime,
            status: entity.status,
            pet_id: entity.pet_id,
            clinic_id: entity.clinic_id,
            veterinarian_id: entity.veterinarian_id,
        }
    }
}

/// Appointment with the names of the pet, clinic, owner and veterinarian.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    pub pet_name: String,
    pub clinic_name: String,
    pub owner_name: Option<String>,
    pub license_no: String,
    pub vet_name: Option<String>,
}

impl AppointmentDetail {
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            appointment_id: self.appointment.appointment_id,
            datetime: self.appointment.datetime,
            status: self.appointment.status,
            pet_id: self.appointment.pet_id,
            pet_name: self.pet_name,
            clinic_id: self.appointment.clinic_id,
            clinic_name: self.clinic_name,
            owner_name: self.owner_name,
            veterinarian_id: self.appointment.veterinarian_id,
            license_no: self.license_no,
            vet_name: self.vet_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentParam {
    pub datetime: NaiveDateTime,
    pub status: String,
    pub pet_id: i32,
    pub clinic_id: i32,
    pub veterinarian_id: i32,
}

impl CreateAppointmentParam {
    pub fn from_dto(dto: CreateAppointmentDto) -> Self {
        Self {
            datetime: dto.datetime,
            status: dto
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            pet_id: dto.pet_id,
            clinic_id: dto.clinic_id,
            veterinarian_id: dto.veterinarian_id,
        }
    }
}

/// Partial appointment update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentParam {
    pub datetime: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub pet_id: Option<i32>,
    pub clinic_id: Option<i32>,
    pub veterinarian_id: Option<i32>,
}

impl UpdateAppointmentParam {
    pub fn from_dto(dto: UpdateAppointmentDto) -> Self {
        Self {
            datetime: dto.datetime,
            status: dto.status,
            pet_id: dto.pet_id,
            clinic_id: dto.clinic_id,
            veterinarian_id: dto.veterinarian_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.datetime.is_none()
            && self.status.is_none()
            && self.pet_id.is_none()
            && self.clinic_id.is_none()
            && self.veterinarian_id.is_none()
    }

    /// Whether the update moves the appointment to another veterinarian or clinic.
    pub fn changes_pairing(&self) -> bool {
        self.clinic_id.is_some() || self.veterinarian_id.is_some()
    }
}
