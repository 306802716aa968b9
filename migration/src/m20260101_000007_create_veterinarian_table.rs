use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Veterinarian::Table)
                    .if_not_exists()
                    .col(pk_auto(Veterinarian::VeterinarianId))
                    .col(string_uniq(Veterinarian::LicenseNo))
                    .col(integer_null(Veterinarian::UserId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veterinarian_user_id")
                            .from(Veterinarian::Table, Veterinarian::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Veterinarian::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Veterinarian {
    Table,
    VeterinarianId,
    LicenseNo,
    UserId,
}
