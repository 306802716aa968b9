//! Pet factory. `create_owned_pet` also inserts the `pet_owner` link.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets.
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    species: String,
    breed: Option<String>,
    gender: String,
    age: Option<i32>,
}

impl<'a> PetFactory<'a> {
    /// Defaults to a three year old female dog named `"Pet {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pet {}", id),
            species: "dog".to_string(),
            breed: Some("mixed".to_string()),
            gender: "female".to_string(),
            age: Some(3),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }

    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            breed: ActiveValue::Set(self.breed),
            gender: ActiveValue::Set(self.gender),
            birth_date: ActiveValue::Set(None),
            age: ActiveValue::Set(self.age),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_pet(db: &DatabaseConnection) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db).build().await
}

/// Creates a pet and links it to `user_id` as owner.
///
/// # Returns
/// - `Ok((pet, pet_owner))` - Created pet and ownership row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_owned_pet(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(entity::pet::Model, entity::pet_owner::Model), DbErr> {
    let pet = create_pet(db).await?;
    let link = entity::pet_owner::ActiveModel {
        address: ActiveValue::Set("1 Test Lane".to_string()),
        user_id: ActiveValue::Set(user_id),
        pet_id: ActiveValue::Set(pet.pet_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok((pet, link))
}
