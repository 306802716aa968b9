//! Aggregates for the admin reports.

use sea_orm::FromQueryResult;

use crate::model::report::{ClinicCountDto, StatusCountDto, TreatmentReportDto};

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct StatusCount {
    pub status: String,
    pub total: i64,
}

impl StatusCount {
    pub fn into_dto(self) -> StatusCountDto {
        StatusCountDto {
            status: self.status,
            total: self.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ClinicCount {
    pub clinic: String,
    pub total: i64,
}

impl ClinicCount {
    pub fn into_dto(self) -> ClinicCountDto {
        ClinicCountDto {
            clinic: self.clinic,
            total: self.total,
        }
    }
}

/// One treatment record with the pet and the treating veterinarian.
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentReportRow {
    pub appointment_id: i32,
    pub pet_name: String,
    pub diagnosis: String,
    pub vet_name: Option<String>,
    pub license_no: Option<String>,
}

impl TreatmentReportRow {
    pub fn into_dto(self) -> TreatmentReportDto {
        TreatmentReportDto {
            appointment_id: self.appointment_id,
            pet_name: self.pet_name,
            diagnosis: self.diagnosis,
            vet_name: self.vet_name,
            license_no: self.license_no,
        }
    }
}
