use crate::server::{
    data::appointment::{AppointmentFilter, AppointmentRepository},
    model::appointment::UpdateAppointmentParam,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_filtered;
mod update;
mod update_status;
