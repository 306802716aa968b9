use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A veterinarian license with the linked account's contact details, if claimed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VeterinarianDto {
    pub veterinarian_id: i32,
    pub license_no: String,
    pub user_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVeterinarianDto {
    #[serde(default)]
    pub license_no: String,
    pub user_id: Option<i32>,
    pub clinic_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VeterinarianCreatedDto {
    pub message: String,
    pub veterinarian_id: i32,
}
