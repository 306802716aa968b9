use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TreatmentDto {
    pub record_id: i32,
    pub date: Option<NaiveDate>,
    pub diagnosis: String,
    pub note: String,
    pub appointment_id: i32,
    pub pet_name: Option<String>,
    pub vet_name: Option<String>,
    pub license_no: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTreatmentDto {
    pub appointment_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TreatmentCreatedDto {
    pub message: String,
    pub record_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTreatmentDto {
    pub diagnosis: String,
    pub note: String,
}
