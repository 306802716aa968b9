use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerDto {
    pub owner_id: i32,
    pub address: String,
    pub user_id: i32,
    pub pet_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub pet_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOwnerDto {
    pub address: Option<String>,
    /// Defaults to the caller. Only admins may name another user.
    pub user_id: Option<i32>,
    pub pet_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerCreatedDto {
    pub message: String,
    pub owner_id: i32,
}
