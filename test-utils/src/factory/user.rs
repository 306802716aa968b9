//! User factory for creating test accounts.
//!
//! Users are inserted with a placeholder password hash. Tests that exercise login hash
//! their own password and pass it through `password_hash()`.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .email("admin@example.com")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    phone_no: Option<String>,
    role: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name / last_name: `"First {id}"` / `"Last {id}"`
    /// - email: `"user{id}@example.com"`
    /// - role: `pet_owner`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            email: format!("user{}@example.com", id),
            password_hash: "not-a-real-hash".to_string(),
            phone_no: None,
            role: Some("pet_owner".to_string()),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn phone_no(mut self, phone_no: impl Into<String>) -> Self {
        self.phone_no = Some(phone_no.into());
        self
    }

    /// Sets the role name granted to the user (`pet_owner`, `veterinarian`, `admin`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Inserts the user without any role row.
    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    /// Builds and inserts the user and, when a role is set, its `user_role` row.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert, or unknown role name
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone_no: ActiveValue::Set(self.phone_no),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if let Some(role) = self.role {
            let role = entity::prelude::Role::find()
                .filter(entity::role::Column::Role.eq(role.as_str()))
                .one(self.db)
                .await?
                .ok_or_else(|| DbErr::RecordNotFound(format!("role {}", role)))?;

            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user.user_id),
                role_id: ActiveValue::Set(role.role_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a pet owner with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the given role.
///
/// # Example
///
/// ```rust,ignore
/// let admin = create_user_with_role(&db, "admin").await?;
/// ```
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: &str,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
