use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000006_create_clinic_table::Clinic,
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
                    .table(VeterinarianClinic::Table)
                    .if_not_exists()
                    .col(integer(VeterinarianClinic::VeterinarianId))
                    .col(integer(VeterinarianClinic::ClinicId))
                    .primary_key(
                        Index::create()
                            .col(VeterinarianClinic::VeterinarianId)
                            .col(VeterinarianClinic::ClinicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veterinarian_clinic_veterinarian_id")
                            .from(VeterinarianClinic::Table, VeterinarianClinic::VeterinarianId)
                            .to(Veterinarian::Table, Veterinarian::VeterinarianId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veterinarian_clinic_clinic_id")
                            .from(VeterinarianClinic::Table, VeterinarianClinic::ClinicId)
                            .to(Clinic::Table, Clinic::ClinicId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VeterinarianClinic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VeterinarianClinic {
    Table,
    VeterinarianId,
    ClinicId,
}
