//! Pet management.
//!
//! Owners manage the pets they are linked to; admins manage every pet. Veterinarians
//! never see pets directly.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::Role,
    server::{
        data::{owner::OwnerRepository, pet::PetRepository},
        error::{domain::DomainError, AppError},
        model::{
            auth::Identity,
            owner::CreateOwnerParam,
            pet::{CreatePetParam, Pet, UpdatePetParam},
        },
        pool::transaction,
        service::validator::DomainValidator,
    },
};

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pet and links the caller to it as an owner.
    pub async fn create(&self, caller: &Identity, param: CreatePetParam) -> Result<Pet, AppError> {
        let txn = self.db.begin().await?;
        let result = create_owned_pet(&txn, caller.user_id, param).await;

        transaction::finish(txn, result).await
    }

    /// Every pet for admins, the caller's own pets for owners.
    pub async fn get_visible(&self, caller: &Identity) -> Result<Vec<Pet>, AppError> {
        let pet_repo = PetRepository::new(self.db);

        let pets = match caller.role {
            Role::Admin => pet_repo.get_all().await?,
            _ => {
                let pet_ids = OwnerRepository::new(self.db)
                    .pet_ids_for_user(caller.user_id)
                    .await?;
                pet_repo.get_by_ids(&pet_ids).await?
            }
        };

        Ok(pets)
    }

    /// Fetches one pet the caller may see.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - Pet exists and is visible to the caller
    /// - `Ok(None)` - Missing, owned by someone else, or the caller is a veterinarian
    pub async fn get_visible_by_id(
        &self,
        caller: &Identity,
        pet_id: i32,
    ) -> Result<Option<Pet>, AppError> {
        match caller.role {
            Role::Admin => {}
            Role::PetOwner => {
                if !OwnerRepository::new(self.db)
                    .exists(caller.user_id, pet_id)
                    .await?
                {
                    return Ok(None);
                }
            }
            Role::Veterinarian => return Ok(None),
        }

        Ok(PetRepository::new(self.db).find_by_id(pet_id).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Pet)` - Updated pet
    /// - `Err(DomainError::NoFieldsToUpdate)` - Nothing to change
    /// - `Err(DomainError::NotOwner)` - Owner caller not linked to the pet
    /// - `Err(AppError::NotFound)` - No such pet
    pub async fn update(
        &self,
        caller: &Identity,
        pet_id: i32,
        param: UpdatePetParam,
    ) -> Result<Pet, AppError> {
        if param.is_empty() {
            return Err(DomainError::NoFieldsToUpdate.into());
        }

        let txn = self.db.begin().await?;
        let result = update_pet(&txn, caller, pet_id, param).await;

        transaction::finish(txn, result).await
    }

    /// Deletes a pet with its ownership rows, appointments and treatment records.
    pub async fn delete(&self, caller: &Identity, pet_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let result = delete_pet(&txn, caller, pet_id).await;

        transaction::finish(txn, result).await
    }
}

fn pet_not_found() -> AppError {
    AppError::NotFound("Pet not found".to_string())
}

async fn create_owned_pet<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    param: CreatePetParam,
) -> Result<Pet, AppError> {
    let pet = PetRepository::new(db).create(&param).await?;

    OwnerRepository::new(db)
        .create(CreateOwnerParam {
            address: param.address,
            user_id,
            pet_id: pet.pet_id,
        })
        .await?;

    Ok(pet)
}

async fn update_pet<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    pet_id: i32,
    param: UpdatePetParam,
) -> Result<Pet, AppError> {
    require_pet_access(db, caller, pet_id).await?;

    PetRepository::new(db)
        .update(pet_id, param)
        .await?
        .ok_or_else(pet_not_found)
}

async fn delete_pet<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    pet_id: i32,
) -> Result<(), AppError> {
    require_pet_access(db, caller, pet_id).await?;

    if !PetRepository::new(db).delete(pet_id).await? {
        return Err(pet_not_found());
    }

    Ok(())
}

/// Owners must be linked to the pet. Admins may touch any existing pet.
async fn require_pet_access<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    pet_id: i32,
) -> Result<(), AppError> {
    if caller.is_admin() {
        if PetRepository::new(db).find_by_id(pet_id).await?.is_none() {
            return Err(pet_not_found());
        }
        return Ok(());
    }

    DomainValidator::new(db)
        .validate_ownership(caller.user_id, pet_id)
        .await
}
