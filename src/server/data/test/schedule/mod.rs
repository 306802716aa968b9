use crate::server::{
    data::{is_unique_violation, schedule::ScheduleRepository},
    model::schedule::CreateScheduleParam,
};
use chrono::NaiveTime;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists_for_day;

fn monday_shift(veterinarian_id: i32) -> CreateScheduleParam {
    CreateScheduleParam {
        day: "monday",
        time_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        time_end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        veterinarian_id,
    }
}
