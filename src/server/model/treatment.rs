//! Treatment record models.

use chrono::NaiveDate;

use crate::model::treatment::{TreatmentDto, UpdateTreatmentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Treatment {
    pub record_id: i32,
    pub date: Option<NaiveDate>,
    pub diagnosis: String,
    pub note: String,
    pub appointment_id: i32,
}

impl Treatment {
    pub fn from_entity(entity: entity::treatment_record::Model) -> Self {
        Self {
            record_id: entity.record_id,
            date: entity.date,
            diagnosis: entity.diagnosis,
            note: entity.note,
            appointment_id: entity.appointment_id,
        }
    }
}

/// Treatment record with the pet and veterinarian of its appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentDetail {
    pub treatment: Treatment,
    pub pet_name: Option<String>,
    pub vet_name: Option<String>,
    pub license_no: Option<String>,
}

impl TreatmentDetail {
    pub fn into_dto(self) -> TreatmentDto {
        TreatmentDto {
            record_id: self.treatment.record_id,
            date: self.treatment.date,
            diagnosis: self.treatment.diagnosis,
            note: self.treatment.note,
            appointment_id: self.treatment.appointment_id,
            pet_name: self.pet_name,
            vet_name: self.vet_name,
            license_no: self.license_no,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTreatmentParam {
    pub appointment_id: i32,
    pub date: Option<NaiveDate>,
    pub diagnosis: String,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTreatmentParam {
    pub diagnosis: String,
    pub note: String,
}

impl UpdateTreatmentParam {
    pub fn from_dto(dto: UpdateTreatmentDto) -> Self {
        Self {
            diagnosis: dto.diagnosis,
            note: dto.note,
        }
    }
}
