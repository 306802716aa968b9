//! Veterinarian repository.
//!
//! Covers license rows, their one-time claim by a user account, and clinic assignments in
//! `veterinarian_clinic`.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::veterinarian::Veterinarian;

pub struct VeterinarianRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VeterinarianRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a license row, optionally already linked to a user.
    ///
    /// # Returns
    /// - `Ok(Veterinarian)` - Created row
    /// - `Err(DbErr)` - Insert failed, including unique violations on `license_no` or
    ///   `user_id`
    pub async fn create(&self, license_no: &str, user_id: Option<i32>) -> Result<Veterinarian, DbErr> {
        let entity = entity::veterinarian::ActiveModel {
            license_no: ActiveValue::Set(license_no.to_string()),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Veterinarian::from_entity(entity))
    }

    pub async fn find_by_id(&self, veterinarian_id: i32) -> Result<Option<Veterinarian>, DbErr> {
        let entity = entity::prelude::Veterinarian::find_by_id(veterinarian_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Veterinarian::from_entity))
    }

    pub async fn find_by_license(&self, license_no: &str) -> Result<Option<Veterinarian>, DbErr> {
        let entity = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::LicenseNo.eq(license_no))
            .one(self.db)
            .await?;

        Ok(entity.map(Veterinarian::from_entity))
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Veterinarian>, DbErr> {
        let entity = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Veterinarian::from_entity))
    }

    /// Ids of the veterinarian rows claimed by this user. Empty for non-veterinarians.
    pub async fn ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|e| e.veterinarian_id).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Veterinarian>, DbErr> {
        let entities = entity::prelude::Veterinarian::find()
            .order_by_asc(entity::veterinarian::Column::VeterinarianId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Veterinarian::from_entity).collect())
    }

    pub async fn get_by_ids(
        &self,
        veterinarian_ids: &[i32],
    ) -> Result<HashMap<i32, Veterinarian>, DbErr> {
        if veterinarian_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::VeterinarianId.is_in(veterinarian_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.veterinarian_id, Veterinarian::from_entity(e)))
            .collect())
    }

    /// Veterinarians assigned to a clinic, ordered by id.
    pub async fn get_by_clinic(&self, clinic_id: i32) -> Result<Vec<Veterinarian>, DbErr> {
        let veterinarian_ids: Vec<i32> = entity::prelude::VeterinarianClinic::find()
            .filter(entity::veterinarian_clinic::Column::ClinicId.eq(clinic_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| e.veterinarian_id)
            .collect();

        if veterinarian_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::VeterinarianId.is_in(veterinarian_ids))
            .order_by_asc(entity::veterinarian::Column::VeterinarianId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Veterinarian::from_entity).collect())
    }

    /// Links a user to an unclaimed license row.
    ///
    /// The update only matches while `user_id` is still NULL, so of several concurrent
    /// claims on one row exactly one affects it.
    ///
    /// # Returns
    /// - `Ok(true)` - This call claimed the row
    /// - `Ok(false)` - Row missing or already claimed
    /// - `Err(DbErr)` - Update failed, including a unique violation when the user already
    ///   holds another license
    pub async fn claim(&self, veterinarian_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Veterinarian::update_many()
            .col_expr(entity::veterinarian::Column::UserId, Expr::value(user_id))
            .filter(entity::veterinarian::Column::VeterinarianId.eq(veterinarian_id))
            .filter(entity::veterinarian::Column::UserId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Whether the veterinarian is assigned to the clinic.
    pub async fn is_linked(&self, veterinarian_id: i32, clinic_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::VeterinarianClinic::find_by_id((veterinarian_id, clinic_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Assigns a veterinarian to a clinic. Assigning an existing pair is a no-op.
    ///
    /// Conflicts are resolved with `ON CONFLICT DO NOTHING` rather than a failed insert, so
    /// an enclosing transaction is never aborted by a concurrent link of the same pair.
    ///
    /// # Returns
    /// - `Ok(true)` - Pair newly linked
    /// - `Ok(false)` - Pair was already linked
    pub async fn link_clinic(&self, veterinarian_id: i32, clinic_id: i32) -> Result<bool, DbErr> {
        let link = entity::veterinarian_clinic::ActiveModel {
            veterinarian_id: ActiveValue::Set(veterinarian_id),
            clinic_id: ActiveValue::Set(clinic_id),
        };

        let rows = entity::prelude::VeterinarianClinic::insert(link)
            .on_conflict(
                OnConflict::columns([
                    entity::veterinarian_clinic::Column::VeterinarianId,
                    entity::veterinarian_clinic::Column::ClinicId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows == 1)
    }
}
