//! Clinic repository.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::clinic::{Clinic, ClinicParam};

pub struct ClinicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClinicRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: ClinicParam) -> Result<Clinic, DbErr> {
        let entity = entity::clinic::ActiveModel {
            name: ActiveValue::Set(param.name),
            phone_no: ActiveValue::Set(param.phone_no),
            address: ActiveValue::Set(param.address),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Clinic::from_entity(entity))
    }

    pub async fn find_by_id(&self, clinic_id: i32) -> Result<Option<Clinic>, DbErr> {
        let entity = entity::prelude::Clinic::find_by_id(clinic_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Clinic::from_entity))
    }

    pub async fn exists(&self, clinic_id: i32) -> Result<bool, DbErr> {
        Ok(self.find_by_id(clinic_id).await?.is_some())
    }

    pub async fn get_all(&self) -> Result<Vec<Clinic>, DbErr> {
        let entities = entity::prelude::Clinic::find()
            .order_by_asc(entity::clinic::Column::ClinicId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Clinic::from_entity).collect())
    }

    pub async fn get_by_ids(&self, clinic_ids: &[i32]) -> Result<HashMap<i32, Clinic>, DbErr> {
        if clinic_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Clinic::find()
            .filter(entity::clinic::Column::ClinicId.is_in(clinic_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.clinic_id, Clinic::from_entity(e)))
            .collect())
    }

    /// Overwrites every column of a clinic.
    ///
    /// # Returns
    /// - `Ok(Some(Clinic))` - Updated clinic
    /// - `Ok(None)` - No clinic with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn replace(&self, clinic_id: i32, param: ClinicParam) -> Result<Option<Clinic>, DbErr> {
        let Some(entity) = entity::prelude::Clinic::find_by_id(clinic_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(param.name);
        active.phone_no = ActiveValue::Set(param.phone_no);
        active.address = ActiveValue::Set(param.address);

        let updated = active.update(self.db).await?;

        Ok(Some(Clinic::from_entity(updated)))
    }
}
