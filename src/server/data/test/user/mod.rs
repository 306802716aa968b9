use crate::{
    model::auth::Role,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_role;
mod create;
mod get_role_names;
