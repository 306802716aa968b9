use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for appointments. The caller supplies the pet, clinic, and veterinarian ids;
/// the factory does not check that the veterinarian works at the clinic.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    pet_id: i32,
    clinic_id: i32,
    veterinarian_id: i32,
    datetime: chrono::NaiveDateTime,
    status: String,
}

impl<'a> AppointmentFactory<'a> {
    /// Defaults to a `scheduled` appointment one day from now.
    pub fn new(db: &'a DatabaseConnection, pet_id: i32, clinic_id: i32, veterinarian_id: i32) -> Self {
        Self {
            db,
            pet_id,
            clinic_id,
            veterinarian_id,
            datetime: (Utc::now() + Duration::days(1)).naive_utc(),
            status: "scheduled".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn datetime(mut self, datetime: chrono::NaiveDateTime) -> Self {
        self.datetime = datetime;
        self
    }

    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            datetime: ActiveValue::Set(self.datetime),
            status: ActiveValue::Set(self.status),
            pet_id: ActiveValue::Set(self.pet_id),
            clinic_id: ActiveValue::Set(self.clinic_id),
            veterinarian_id: ActiveValue::Set(self.veterinarian_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_appointment(
    db: &DatabaseConnection,
    pet_id: i32,
    clinic_id: i32,
    veterinarian_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, pet_id, clinic_id, veterinarian_id)
        .build()
        .await
}
