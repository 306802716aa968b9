use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clinic::Table)
                    .if_not_exists()
                    .col(pk_auto(Clinic::ClinicId))
                    .col(string(Clinic::Name))
                    .col(string_null(Clinic::PhoneNo))
                    .col(string_null(Clinic::Address))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clinic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clinic {
    Table,
    ClinicId,
    Name,
    PhoneNo,
    Address,
}
