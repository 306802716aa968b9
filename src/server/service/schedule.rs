//! Weekly veterinarian schedules. One entry per veterinarian per weekday.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::Role,
    server::{
        data::{
            is_unique_violation, schedule::ScheduleRepository,
            veterinarian::VeterinarianRepository,
        },
        error::{domain::DomainError, AppError},
        model::{
            auth::Identity,
            schedule::{CreateScheduleParam, Schedule},
        },
        pool::transaction,
        service::validator::DomainValidator,
        util::parse::weekday_order,
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// A veterinarian's week, Monday first, then by start time.
    pub async fn get_for_veterinarian(&self, veterinarian_id: i32) -> Result<Vec<Schedule>, AppError> {
        let mut schedules = ScheduleRepository::new(self.db)
            .get_by_veterinarian(veterinarian_id)
            .await?;

        schedules.sort_by(|a, b| {
            weekday_order(&a.day)
                .cmp(&weekday_order(&b.day))
                .then(a.time_start.cmp(&b.time_start))
        });

        Ok(schedules)
    }

    /// Adds a schedule entry.
    ///
    /// Veterinarians may only add entries to their own license row.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Created entry
    /// - `Err(AppError::NotFound)` - Veterinarian does not exist
    /// - `Err(DomainError::NotOwner)` - Veterinarian caller adding to another row
    /// - `Err(DomainError::DuplicateSchedule)` - The day is already taken
    pub async fn create(
        &self,
        caller: &Identity,
        param: CreateScheduleParam,
    ) -> Result<Schedule, AppError> {
        let txn = self.db.begin().await?;
        let result = insert_schedule(&txn, caller, &param).await;

        transaction::finish(txn, result).await
    }
}

async fn insert_schedule<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    param: &CreateScheduleParam,
) -> Result<Schedule, AppError> {
    if VeterinarianRepository::new(db)
        .find_by_id(param.veterinarian_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Veterinarian not found".to_string()));
    }

    let validator = DomainValidator::new(db);
    if caller.role == Role::Veterinarian {
        validator
            .validate_veterinarian_link(caller.user_id, param.veterinarian_id, "schedules")
            .await?;
    }
    validator
        .validate_schedule_slot(param.veterinarian_id, param.day)
        .await?;

    ScheduleRepository::new(db).create(param).await.map_err(|err| {
        if is_unique_violation(&err) {
            AppError::from(DomainError::DuplicateSchedule {
                veterinarian_id: param.veterinarian_id,
                day: param.day.to_string(),
            })
        } else {
            AppError::from(err)
        }
    })
}
