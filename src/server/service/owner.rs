//! Pet ownership links.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::owner::CreateOwnerDto,
    server::{
        data::{owner::OwnerRepository, pet::PetRepository, user::UserRepository},
        error::{domain::DomainError, AppError},
        model::{
            auth::Identity,
            owner::{CreateOwnerParam, Owner, OwnerDetail},
        },
        pool::transaction,
    },
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every ownership link with owner and pet names.
    pub async fn get_all(&self) -> Result<Vec<OwnerDetail>, AppError> {
        let owners = OwnerRepository::new(self.db).get_all().await?;

        let user_ids: Vec<i32> = owners.iter().map(|o| o.user_id).collect();
        let pet_ids: Vec<i32> = owners.iter().map(|o| o.pet_id).collect();

        let users = UserRepository::new(self.db).get_by_ids(&user_ids).await?;
        let pets: HashMap<i32, String> = PetRepository::new(self.db)
            .get_by_ids(&pet_ids)
            .await?
            .into_iter()
            .map(|p| (p.pet_id, p.name))
            .collect();

        let details = owners
            .into_iter()
            .map(|owner| {
                let (first_name, last_name) = users
                    .get(&owner.user_id)
                    .map(|u| (u.first_name.clone(), u.last_name.clone()))
                    .unwrap_or_default();
                let pet_name = pets.get(&owner.pet_id).cloned().unwrap_or_default();

                OwnerDetail {
                    owner,
                    first_name,
                    last_name,
                    pet_name,
                }
            })
            .collect();

        Ok(details)
    }

    /// Links a user to a pet.
    ///
    /// Pet owners can only link themselves, and only to a pet that has no other owner.
    /// Admins must name the user.
    ///
    /// # Returns
    /// - `Ok(Owner)` - Created link
    /// - `Err(DomainError::NotOwner)` - Owner caller named another user or another
    ///   user's pet
    /// - `Err(AppError::BadRequest)` - Admin omitted `user_id`, or the link exists
    /// - `Err(AppError::NotFound)` - User or pet missing
    pub async fn create(&self, caller: &Identity, dto: CreateOwnerDto) -> Result<Owner, AppError> {
        let user_id = if caller.is_admin() {
            dto.user_id
                .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?
        } else {
            match dto.user_id {
                Some(user_id) if user_id != caller.user_id => {
                    return Err(DomainError::NotOwner("pets").into())
                }
                _ => caller.user_id,
            }
        };

        let param = CreateOwnerParam {
            address: dto.address.unwrap_or_default(),
            user_id,
            pet_id: dto.pet_id,
        };

        let txn = self.db.begin().await?;
        let result = link_owner(&txn, caller, param).await;

        transaction::finish(txn, result).await
    }
}

async fn link_owner<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    param: CreateOwnerParam,
) -> Result<Owner, AppError> {
    if PetRepository::new(db).find_by_id(param.pet_id).await?.is_none() {
        return Err(AppError::NotFound("Pet not found".to_string()));
    }
    if UserRepository::new(db).find_by_id(param.user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let owner_repo = OwnerRepository::new(db);
    let current_owners = owner_repo.user_ids_for_pet(param.pet_id).await?;

    if current_owners.contains(&param.user_id) {
        return Err(AppError::BadRequest(
            "User already owns this pet".to_string(),
        ));
    }
    if !caller.is_admin() && !current_owners.is_empty() {
        return Err(DomainError::NotOwner("pets").into());
    }

    Ok(owner_repo.create(param).await?)
}
