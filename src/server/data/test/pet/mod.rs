use crate::server::{
    data::pet::PetRepository,
    model::pet::{CreatePetParam, UpdatePetParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
