use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    PetOwner,
    Veterinarian,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::PetOwner, Role::Veterinarian, Role::Admin];

    /// Name stored in the `role` table and carried in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PetOwner => "pet_owner",
            Role::Veterinarian => "veterinarian",
            Role::Admin => "admin",
        }
    }

    /// Parses a client-supplied role, accepting the `owner` and `vet` shorthands.
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None` for anything else.
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "owner" | "pet_owner" => Some(Role::PetOwner),
            "vet" | "veterinarian" => Some(Role::Veterinarian),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: Option<String>,
    /// Defaults to `pet_owner`. Accepts `owner` and `vet` as aliases.
    pub role: Option<String>,
    /// Required when registering as a veterinarian.
    pub license_no: Option<String>,
    /// Required when registering as a veterinarian.
    pub clinic_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisteredDto {
    pub message: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub access_token: String,
    pub role: Role,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Claims of the caller's verified token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}
