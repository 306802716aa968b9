//! Veterinarian weekly schedule models.

use chrono::NaiveTime;

use crate::{
    model::schedule::{CreateScheduleDto, ScheduleDto},
    server::{
        error::domain::DomainError,
        util::parse::{format_time_of_day, normalize_weekday, parse_time_of_day},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub schedule_id: i32,
    pub day: String,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub veterinarian_id: i32,
}

impl Schedule {
    pub fn from_entity(entity: entity::veterinarian_schedule::Model) -> Self {
        Self {
            schedule_id: entity.schedule_id,
            day: entity.day,
            time_start: entity.time_start,
            time_end: entity.time_end,
            veterinarian_id: entity.veterinarian_id,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            schedule_id: self.schedule_id,
            day: self.day,
            time_start: format_time_of_day(self.time_start),
            time_end: format_time_of_day(self.time_end),
            veterinarian_id: self.veterinarian_id,
        }
    }
}

/// Schedule entry with the day normalized to lower case and the times parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateScheduleParam {
    pub day: &'static str,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub veterinarian_id: i32,
}

impl CreateScheduleParam {
    /// # Returns
    /// - `Ok(CreateScheduleParam)` - Valid weekday and a non-empty time range
    /// - `Err(DomainError::InvalidDay)` - Not a weekday name
    /// - `Err(DomainError::InvalidTime)` - A time is not `HH:MM[:SS]`
    /// - `Err(DomainError::InvalidTimeRange)` - `time_end` is not after `time_start`
    pub fn from_dto(dto: CreateScheduleDto) -> Result<Self, DomainError> {
        let day = normalize_weekday(&dto.day)?;
        let time_start = parse_time_of_day(&dto.time_start)?;
        let time_end = parse_time_of_day(&dto.time_end)?;

        if time_end <= time_start {
            return Err(DomainError::InvalidTimeRange);
        }

        Ok(Self {
            day,
            time_start,
            time_end,
            veterinarian_id: dto.veterinarian_id,
        })
    }
}
