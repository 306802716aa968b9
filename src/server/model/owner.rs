//! Pet ownership models.

use crate::model::owner::OwnerDto;

/// Row tying a user to a pet.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub owner_id: i32,
    pub address: String,
    pub user_id: i32,
    pub pet_id: i32,
}

impl Owner {
    pub fn from_entity(entity: entity::pet_owner::Model) -> Self {
        Self {
            owner_id: entity.owner_id,
            address: entity.address,
            user_id: entity.user_id,
            pet_id: entity.pet_id,
        }
    }
}

/// Ownership row with the owner's name and the pet's name.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDetail {
    pub owner: Owner,
    pub first_name: String,
    pub last_name: String,
    pub pet_name: String,
}

impl OwnerDetail {
    pub fn into_dto(self) -> OwnerDto {
        OwnerDto {
            owner_id: self.owner.owner_id,
            address: self.owner.address,
            user_id: self.owner.user_id,
            pet_id: self.owner.pet_id,
            first_name: self.first_name,
            last_name: self.last_name,
            pet_name: self.pet_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOwnerParam {
    pub address: String,
    pub user_id: i32,
    pub pet_id: i32,
}
