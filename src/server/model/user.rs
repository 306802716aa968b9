//! User account models.

use chrono::{DateTime, Utc};

use crate::model::{
    auth::Role,
    user::{UserDto, UserSummaryDto},
};

/// A user account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_no: entity.phone_no,
            created_at: entity.created_at,
        }
    }

    /// "First Last", as shown on appointments and reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Stored credentials for a login attempt.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

impl Credentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// A user together with the role assigned at registration.
///
/// `role` is `None` only for accounts whose role row is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithRole {
    pub user: User,
    pub role: Option<Role>,
}

impl UserWithRole {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user.user_id,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            email: self.user.email,
            phone_no: self.user.phone_no,
            created_at: self.user.created_at,
            role: self.role,
        }
    }

    pub fn into_summary_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            user_id: self.user.user_id,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            email: self.user.email,
            role: self.role,
        }
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_no: Option<String>,
}
