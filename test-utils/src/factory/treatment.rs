use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a treatment record dated today for `appointment_id`.
pub async fn create_treatment(
    db: &DatabaseConnection,
    appointment_id: i32,
) -> Result<entity::treatment_record::Model, DbErr> {
    entity::treatment_record::ActiveModel {
        date: ActiveValue::Set(Some(Utc::now().date_naive())),
        diagnosis: ActiveValue::Set("Healthy".to_string()),
        note: ActiveValue::Set("Routine checkup".to_string()),
        appointment_id: ActiveValue::Set(appointment_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
