pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_role_table;
mod m20260101_000003_create_user_role_table;
mod m20260101_000004_create_pet_table;
mod m20260101_000005_create_pet_owner_table;
mod m20260101_000006_create_clinic_table;
mod m20260101_000007_create_veterinarian_table;
mod m20260101_000008_create_veterinarian_clinic_table;
mod m20260101_000009_create_veterinarian_schedule_table;
mod m20260101_000010_create_appointment_table;
mod m20260101_000011_create_treatment_record_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_role_table::Migration),
            Box::new(m20260101_000003_create_user_role_table::Migration),
            Box::new(m20260101_000004_create_pet_table::Migration),
            Box::new(m20260101_000005_create_pet_owner_table::Migration),
            Box::new(m20260101_000006_create_clinic_table::Migration),
            Box::new(m20260101_000007_create_veterinarian_table::Migration),
            Box::new(m20260101_000008_create_veterinarian_clinic_table::Migration),
            Box::new(m20260101_000009_create_veterinarian_schedule_table::Migration),
            Box::new(m20260101_000010_create_appointment_table::Migration),
            Box::new(m20260101_000011_create_treatment_record_table::Migration),
        ]
    }
}
