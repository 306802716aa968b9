use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub schedule_id: i32,
    /// Lower-case weekday name.
    pub day: String,
    /// `HH:MM`
    pub time_start: String,
    /// `HH:MM`
    pub time_end: String,
    pub veterinarian_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    #[serde(default)]
    pub day: String,
    /// `HH:MM` or `HH:MM:SS`
    #[serde(default)]
    pub time_start: String,
    /// `HH:MM` or `HH:MM:SS`
    #[serde(default)]
    pub time_end: String,
    pub veterinarian_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleCreatedDto {
    pub message: String,
    pub schedule_id: i32,
}
