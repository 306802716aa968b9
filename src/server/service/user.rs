//! User service for business logic.
//!
//! This module provides the `UserService` for the admin user listing. It attaches the
//! role assigned at registration to each account.

use sea_orm::DatabaseConnection;

use crate::{
    model::auth::Role,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{User, UserWithRole},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with their role.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithRole>)` - Users ordered by id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_all(&self) -> Result<Vec<UserWithRole>, AppError> {
        let repo = UserRepository::new(self.db);

        let users = repo.get_all().await?;
        let user_ids: Vec<i32> = users.iter().map(|u| u.user_id).collect();
        let roles = repo.get_role_names(&user_ids).await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let role = roles.get(&user.user_id).and_then(|name| Role::normalize(name));
                UserWithRole { user, role }
            })
            .collect())
    }

    /// Retrieves one user with their role.
    ///
    /// # Returns
    /// - `Ok(UserWithRole)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, user_id: i32) -> Result<UserWithRole, AppError> {
        let repo = UserRepository::new(self.db);

        let user: User = repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let role = repo
            .find_role_name(user_id)
            .await?
            .and_then(|name| Role::normalize(&name));

        Ok(UserWithRole { user, role })
    }
}
