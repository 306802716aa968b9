use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_pet_table::Pet, m20260101_000006_create_clinic_table::Clinic,
    m20260101_000007_create_veterinarian_table::Veterinarian,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::AppointmentId))
                    .col(timestamp(Appointment::Datetime))
                    .col(string(Appointment::Status).default("scheduled"))
                    .col(integer(Appointment::PetId))
                    .col(integer(Appointment::ClinicId))
                    .col(integer(Appointment::VeterinarianId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_pet_id")
                            .from(Appointment::Table, Appointment::PetId)
                            .to(Pet::Table, Pet::PetId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_clinic_id")
                            .from(Appointment::Table, Appointment::ClinicId)
                            .to(Clinic::Table, Clinic::ClinicId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_veterinarian_id")
                            .from(Appointment::Table, Appointment::VeterinarianId)
                            .to(Veterinarian::Table, Veterinarian::VeterinarianId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    AppointmentId,
    Datetime,
    Status,
    PetId,
    ClinicId,
    VeterinarianId,
}
