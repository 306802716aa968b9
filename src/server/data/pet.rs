//! Pet repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::pet::{CreatePetParam, Pet, UpdatePetParam};

pub struct PetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: &CreatePetParam) -> Result<Pet, DbErr> {
        let entity = entity::pet::ActiveModel {
            name: ActiveValue::Set(param.name.clone()),
            species: ActiveValue::Set(param.species.clone()),
            breed: ActiveValue::Set(param.breed.clone()),
            gender: ActiveValue::Set(param.gender.clone()),
            birth_date: ActiveValue::Set(param.birth_date),
            age: ActiveValue::Set(param.age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pet::from_entity(entity))
    }

    pub async fn find_by_id(&self, pet_id: i32) -> Result<Option<Pet>, DbErr> {
        let entity = entity::prelude::Pet::find_by_id(pet_id).one(self.db).await?;

        Ok(entity.map(Pet::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Pet>, DbErr> {
        self.get_filtered(None).await
    }

    /// Pets with the given ids, ordered by id.
    pub async fn get_by_ids(&self, pet_ids: &[i32]) -> Result<Vec<Pet>, DbErr> {
        if pet_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.get_filtered(Some(pet_ids)).await
    }

    async fn get_filtered(&self, pet_ids: Option<&[i32]>) -> Result<Vec<Pet>, DbErr> {
        let mut query = entity::prelude::Pet::find().order_by_asc(entity::pet::Column::PetId);
        if let Some(ids) = pet_ids {
            query = query.filter(entity::pet::Column::PetId.is_in(ids.to_vec()));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Pet::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - Updated pet
    /// - `Ok(None)` - No pet with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, pet_id: i32, param: UpdatePetParam) -> Result<Option<Pet>, DbErr> {
        let Some(entity) = entity::prelude::Pet::find_by_id(pet_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(species) = param.species {
            active.species = ActiveValue::Set(species);
        }
        if let Some(breed) = param.breed {
            active.breed = ActiveValue::Set(Some(breed));
        }
        if let Some(gender) = param.gender {
            active.gender = ActiveValue::Set(gender);
        }
        if let Some(birth_date) = param.birth_date {
            active.birth_date = ActiveValue::Set(Some(birth_date));
        }
        if let Some(age) = param.age {
            active.age = ActiveValue::Set(Some(age));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Pet::from_entity(updated)))
    }

    /// Deletes a pet with its ownership rows, appointments and their treatment records.
    ///
    /// Run inside a transaction so the cascade is all-or-nothing.
    ///
    /// # Returns
    /// - `Ok(true)` - Pet deleted
    /// - `Ok(false)` - No pet with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, pet_id: i32) -> Result<bool, DbErr> {
        let appointment_ids: Vec<i32> = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PetId.eq(pet_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| a.appointment_id)
            .collect();

        if !appointment_ids.is_empty() {
            entity::prelude::TreatmentRecord::delete_many()
                .filter(entity::treatment_record::Column::AppointmentId.is_in(appointment_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::Appointment::delete_many()
            .filter(entity::appointment::Column::PetId.eq(pet_id))
            .exec(self.db)
            .await?;

        entity::prelude::PetOwner::delete_many()
            .filter(entity::pet_owner::Column::PetId.eq(pet_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Pet::delete_by_id(pet_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
