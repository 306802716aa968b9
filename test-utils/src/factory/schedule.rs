use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a 09:00-17:00 schedule entry for `veterinarian_id` on `day` (lower-case).
pub async fn create_schedule(
    db: &DatabaseConnection,
    veterinarian_id: i32,
    day: &str,
) -> Result<entity::veterinarian_schedule::Model, DbErr> {
    let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
    let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default();

    entity::veterinarian_schedule::ActiveModel {
        day: ActiveValue::Set(day.to_string()),
        time_start: ActiveValue::Set(start),
        time_end: ActiveValue::Set(end),
        veterinarian_id: ActiveValue::Set(veterinarian_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
