use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260101_000001_create_user_table::User, m20260101_000004_create_pet_table::Pet};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PetOwner::Table)
                    .if_not_exists()
                    .col(pk_auto(PetOwner::OwnerId))
                    .col(string(PetOwner::Address).default(""))
                    .col(integer(PetOwner::UserId))
                    .col(integer(PetOwner::PetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_owner_user_id")
                            .from(PetOwner::Table, PetOwner::UserId)
                            .to(User::Table, User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_owner_pet_id")
                            .from(PetOwner::Table, PetOwner::PetId)
                            .to(Pet::Table, Pet::PetId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PetOwner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PetOwner {
    Table,
    OwnerId,
    Address,
    UserId,
    PetId,
}
