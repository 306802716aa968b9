//! Veterinarian schedule repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::schedule::{CreateScheduleParam, Schedule};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a schedule entry.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Created entry
    /// - `Err(DbErr)` - Insert failed, including a unique violation on
    ///   `(veterinarian_id, day)`
    pub async fn create(&self, param: &CreateScheduleParam) -> Result<Schedule, DbErr> {
        let entity = entity::veterinarian_schedule::ActiveModel {
            day: ActiveValue::Set(param.day.to_string()),
            time_start: ActiveValue::Set(param.time_start),
            time_end: ActiveValue::Set(param.time_end),
            veterinarian_id: ActiveValue::Set(param.veterinarian_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(entity))
    }

    /// Whether the veterinarian already has an entry on this day.
    ///
    /// Days are stored lower-case, so the lookup lower-cases `day` first.
    pub async fn exists_for_day(&self, veterinarian_id: i32, day: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::VeterinarianSchedule::find()
            .filter(entity::veterinarian_schedule::Column::VeterinarianId.eq(veterinarian_id))
            .filter(entity::veterinarian_schedule::Column::Day.eq(day.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// All entries of one veterinarian, in storage order.
    pub async fn get_by_veterinarian(&self, veterinarian_id: i32) -> Result<Vec<Schedule>, DbErr> {
        let entities = entity::prelude::VeterinarianSchedule::find()
            .filter(entity::veterinarian_schedule::Column::VeterinarianId.eq(veterinarian_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Schedule::from_entity).collect())
    }
}
