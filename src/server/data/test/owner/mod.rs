use crate::server::{data::owner::OwnerRepository, model::owner::CreateOwnerParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_pet_ids;
mod pet_ids_for_user;
