//! Pet ownership repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::owner::{CreateOwnerParam, Owner};

pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateOwnerParam) -> Result<Owner, DbErr> {
        let entity = entity::pet_owner::ActiveModel {
            address: ActiveValue::Set(param.address),
            user_id: ActiveValue::Set(param.user_id),
            pet_id: ActiveValue::Set(param.pet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Owner::from_entity(entity))
    }

    /// Whether an ownership row ties this user to this pet.
    pub async fn exists(&self, user_id: i32, pet_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::PetOwner::find()
            .filter(entity::pet_owner::Column::UserId.eq(user_id))
            .filter(entity::pet_owner::Column::PetId.eq(pet_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Ids of the pets this user owns.
    pub async fn pet_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::PetOwner::find()
            .filter(entity::pet_owner::Column::UserId.eq(user_id))
            .order_by_asc(entity::pet_owner::Column::PetId)
            .all(self.db)
            .await?;

        let mut pet_ids: Vec<i32> = entities.into_iter().map(|e| e.pet_id).collect();
        pet_ids.dedup();

        Ok(pet_ids)
    }

    /// Ids of the users who own this pet.
    pub async fn user_ids_for_pet(&self, pet_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::PetOwner::find()
            .filter(entity::pet_owner::Column::PetId.eq(pet_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.user_id).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Owner>, DbErr> {
        let entities = entity::prelude::PetOwner::find()
            .order_by_asc(entity::pet_owner::Column::OwnerId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Owner::from_entity).collect())
    }

    /// Ownership rows for any of the given pets, oldest first.
    pub async fn get_by_pet_ids(&self, pet_ids: &[i32]) -> Result<Vec<Owner>, DbErr> {
        if pet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::PetOwner::find()
            .filter(entity::pet_owner::Column::PetId.is_in(pet_ids.to_vec()))
            .order_by_asc(entity::pet_owner::Column::OwnerId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Owner::from_entity).collect())
    }
}
