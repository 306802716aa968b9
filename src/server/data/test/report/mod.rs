use crate::server::data::report::ReportRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod appointment_clinic_counts;
mod appointment_status_counts;
