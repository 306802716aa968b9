use crate::server::data::{
    is_unique_violation, is_unique_violation_on, veterinarian::VeterinarianRepository,
};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod create;
mod get_by_clinic;
mod link_clinic;
