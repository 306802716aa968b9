use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClinicDto {
    pub clinic_id: i32,
    pub name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
}

/// Body for both creating and replacing a clinic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClinicPayloadDto {
    pub name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClinicCreatedDto {
    pub message: String,
    pub clinic_id: i32,
}
