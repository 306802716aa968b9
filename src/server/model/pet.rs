//! Pet models.

use chrono::NaiveDate;

use crate::model::pet::{CreatePetDto, PetDto, UpdatePetDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub pet_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
}

impl Pet {
    pub fn from_entity(entity: entity::pet::Model) -> Self {
        Self {
            pet_id: entity.pet_id,
            name: entity.name,
            species: entity.species,
            breed: entity.breed,
            gender: entity.gender,
            birth_date: entity.birth_date,
            age: entity.age,
        }
    }

    pub fn into_dto(self) -> PetDto {
        PetDto {
            pet_id: self.pet_id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            gender: self.gender,
            birth_date: self.birth_date,
            age: self.age,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePetParam {
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
    /// Address recorded on the caller's ownership row.
    pub address: String,
}

impl CreatePetParam {
    pub fn from_dto(dto: CreatePetDto) -> Self {
        Self {
            name: dto.name,
            species: dto.species,
            breed: dto.breed,
            gender: dto.gender,
            birth_date: dto.birth_date,
            age: dto.age,
            address: dto.address.unwrap_or_default(),
        }
    }
}

/// Partial pet update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePetParam {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i32>,
}

impl UpdatePetParam {
    pub fn from_dto(dto: UpdatePetDto) -> Self {
        Self {
            name: dto.name,
            species: dto.species,
            breed: dto.breed,
            gender: dto.gender,
            birth_date: dto.birth_date,
            age: dto.age,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.breed.is_none()
            && self.gender.is_none()
            && self.birth_date.is_none()
            && self.age.is_none()
    }
}
