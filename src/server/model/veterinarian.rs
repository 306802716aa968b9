//! Veterinarian models.

use crate::{
    model::veterinarian::{CreateVeterinarianDto, VeterinarianDto},
    server::model::user::User,
};

/// A license row, claimed when `user_id` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Veterinarian {
    pub veterinarian_id: i32,
    pub license_no: String,
    pub user_id: Option<i32>,
}

impl Veterinarian {
    pub fn from_entity(entity: entity::veterinarian::Model) -> Self {
        Self {
            veterinarian_id: entity.veterinarian_id,
            license_no: entity.license_no,
            user_id: entity.user_id,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Veterinarian with the linked account, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct VeterinarianDetail {
    pub veterinarian: Veterinarian,
    pub user: Option<User>,
}

impl VeterinarianDetail {
    pub fn into_dto(self) -> VeterinarianDto {
        let (first_name, last_name, email, phone_no) = match self.user {
            Some(user) => (
                Some(user.first_name),
                Some(user.last_name),
                Some(user.email),
                user.phone_no,
            ),
            None => (None, None, None, None),
        };

        VeterinarianDto {
            veterinarian_id: self.veterinarian.veterinarian_id,
            license_no: self.veterinarian.license_no,
            user_id: self.veterinarian.user_id,
            first_name,
            last_name,
            email,
            phone_no,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVeterinarianParam {
    pub license_no: String,
    pub user_id: Option<i32>,
    pub clinic_id: Option<i32>,
}

impl CreateVeterinarianParam {
    pub fn from_dto(dto: CreateVeterinarianDto) -> Self {
        Self {
            license_no: dto.license_no.trim().to_string(),
            user_id: dto.user_id,
            clinic_id: dto.clinic_id,
        }
    }
}
