use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PetDto {
    pub pet_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePetDto {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    /// Address stored on the ownership row linking the caller to the new pet.
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PetCreatedDto {
    pub message: String,
    pub pet_id: i32,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePetDto {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
}
