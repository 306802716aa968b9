//! Treatment record repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::treatment::{CreateTreatmentParam, Treatment, UpdateTreatmentParam};

pub struct TreatmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TreatmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a treatment record.
    ///
    /// # Returns
    /// - `Ok(Treatment)` - Created record
    /// - `Err(DbErr)` - Insert failed, including a unique violation when the appointment
    ///   already has a record
    pub async fn create(&self, param: CreateTreatmentParam) -> Result<Treatment, DbErr> {
        let entity = entity::treatment_record::ActiveModel {
            date: ActiveValue::Set(param.date),
            diagnosis: ActiveValue::Set(param.diagnosis),
            note: ActiveValue::Set(param.note),
            appointment_id: ActiveValue::Set(param.appointment_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Treatment::from_entity(entity))
    }

    pub async fn find_by_id(&self, record_id: i32) -> Result<Option<Treatment>, DbErr> {
        let entity = entity::prelude::TreatmentRecord::find_by_id(record_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Treatment::from_entity))
    }

    pub async fn exists_for_appointment(&self, appointment_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::TreatmentRecord::find()
            .filter(entity::treatment_record::Column::AppointmentId.eq(appointment_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    pub async fn get_all(&self) -> Result<Vec<Treatment>, DbErr> {
        let entities = entity::prelude::TreatmentRecord::find()
            .order_by_asc(entity::treatment_record::Column::RecordId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Treatment::from_entity).collect())
    }

    /// Records belonging to any of the given appointments.
    pub async fn get_by_appointments(&self, appointment_ids: &[i32]) -> Result<Vec<Treatment>, DbErr> {
        if appointment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::TreatmentRecord::find()
            .filter(entity::treatment_record::Column::AppointmentId.is_in(appointment_ids.to_vec()))
            .order_by_asc(entity::treatment_record::Column::RecordId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Treatment::from_entity).collect())
    }

    /// Replaces diagnosis and note.
    ///
    /// # Returns
    /// - `Ok(Some(Treatment))` - Updated record
    /// - `Ok(None)` - No record with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        record_id: i32,
        param: UpdateTreatmentParam,
    ) -> Result<Option<Treatment>, DbErr> {
        let Some(entity) = entity::prelude::TreatmentRecord::find_by_id(record_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.diagnosis = ActiveValue::Set(param.diagnosis);
        active.note = ActiveValue::Set(param.note);

        let updated = active.update(self.db).await?;

        Ok(Some(Treatment::from_entity(updated)))
    }
}
