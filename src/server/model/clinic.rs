//! Clinic models.

use crate::model::clinic::{ClinicDto, ClinicPayloadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Clinic {
    pub clinic_id: i32,
    pub name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
}

impl Clinic {
    pub fn from_entity(entity: entity::clinic::Model) -> Self {
        Self {
            clinic_id: entity.clinic_id,
            name: entity.name,
            phone_no: entity.phone_no,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> ClinicDto {
        ClinicDto {
            clinic_id: self.clinic_id,
            name: self.name,
            phone_no: self.phone_no,
            address: self.address,
        }
    }
}

/// Full set of clinic columns, used for both create and replace.
#[derive(Debug, Clone)]
pub struct ClinicParam {
    pub name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
}

impl ClinicParam {
    pub fn from_dto(dto: ClinicPayloadDto) -> Self {
        Self {
            name: dto.name,
            phone_no: dto.phone_no,
            address: dto.address,
        }
    }
}
