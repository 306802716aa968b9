use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for veterinarian license rows. Unclaimed (no user) unless `user_id` is set.
pub struct VeterinarianFactory<'a> {
    db: &'a DatabaseConnection,
    license_no: String,
    user_id: Option<i32>,
}

impl<'a> VeterinarianFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            license_no: format!("LIC-{:06}", next_id()),
            user_id: None,
        }
    }

    pub fn license_no(mut self, license_no: impl Into<String>) -> Self {
        self.license_no = license_no.into();
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub async fn build(self) -> Result<entity::veterinarian::Model, DbErr> {
        entity::veterinarian::ActiveModel {
            license_no: ActiveValue::Set(self.license_no),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unclaimed veterinarian license.
pub async fn create_veterinarian(
    db: &DatabaseConnection,
) -> Result<entity::veterinarian::Model, DbErr> {
    VeterinarianFactory::new(db).build().await
}

/// Pairs a veterinarian with a clinic.
pub async fn link_clinic(
    db: &DatabaseConnection,
    veterinarian_id: i32,
    clinic_id: i32,
) -> Result<entity::veterinarian_clinic::Model, DbErr> {
    entity::veterinarian_clinic::ActiveModel {
        veterinarian_id: ActiveValue::Set(veterinarian_id),
        clinic_id: ActiveValue::Set(clinic_id),
    }
    .insert(db)
    .await
}
