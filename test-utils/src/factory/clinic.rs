use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clinics.
pub struct ClinicFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone_no: Option<String>,
    address: Option<String>,
}

impl<'a> ClinicFactory<'a> {
    /// Defaults to `"Clinic {id}"` with a phone number and address.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Clinic {}", id),
            phone_no: Some(format!("555-{:04}", id % 10_000)),
            address: Some(format!("{} Main Street", id)),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    pub async fn build(self) -> Result<entity::clinic::Model, DbErr> {
        entity::clinic::ActiveModel {
            name: ActiveValue::Set(self.name),
            phone_no: ActiveValue::Set(self.phone_no),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_clinic(db: &DatabaseConnection) -> Result<entity::clinic::Model, DbErr> {
    ClinicFactory::new(db).build().await
}
