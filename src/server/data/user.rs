//! User and role repository.
//!
//! Accounts live in `user`; each account has exactly one row in `user_role` pointing at the
//! seeded `role` lookup table.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::auth::Role,
    server::model::user::{CreateUserParam, Credentials, User},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            phone_no: ActiveValue::Set(param.phone_no),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Looks up the stored password hash for a login attempt.
    ///
    /// # Returns
    /// - `Ok(Some(Credentials))` - Account with this exact email exists
    /// - `Ok(None)` - No such account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Credentials::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// All users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Fetches users by id, keyed by id. Missing ids are absent from the map.
    pub async fn get_by_ids(&self, user_ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.user_id, User::from_entity(e)))
            .collect())
    }

    /// Gives a user their role.
    ///
    /// # Returns
    /// - `Ok(true)` - Role row found and assignment inserted
    /// - `Ok(false)` - The role is missing from the lookup table
    /// - `Err(DbErr)` - Insert failed, including a second assignment for the same user
    pub async fn assign_role(&self, user_id: i32, role: Role) -> Result<bool, DbErr> {
        let Some(role_row) = entity::prelude::Role::find()
            .filter(entity::role::Column::Role.eq(role.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_row.role_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Stored role name of one user.
    pub async fn find_role_name(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let Some(assignment) = entity::prelude::UserRole::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let role = entity::prelude::Role::find_by_id(assignment.role_id)
            .one(self.db)
            .await?;

        Ok(role.map(|r| r.role))
    }

    /// Stored role names keyed by user id.
    pub async fn get_role_names(&self, user_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let assignments = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        let roles: HashMap<i32, String> = entity::prelude::Role::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.role_id, r.role))
            .collect();

        Ok(assignments
            .into_iter()
            .filter_map(|a| roles.get(&a.role_id).map(|name| (a.user_id, name.clone())))
            .collect())
    }
}
