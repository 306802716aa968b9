use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000007_create_veterinarian_table::Veterinarian;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VeterinarianSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(VeterinarianSchedule::ScheduleId))
                    .col(string(VeterinarianSchedule::Day))
                    .col(time(VeterinarianSchedule::TimeStart))
                    .col(time(VeterinarianSchedule::TimeEnd))
                    .col(integer(VeterinarianSchedule::VeterinarianId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_veterinarian_schedule_veterinarian_id")
                            .from(
                                VeterinarianSchedule::Table,
                                VeterinarianSchedule::VeterinarianId,
                            )
                            .to(Veterinarian::Table, Veterinarian::VeterinarianId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One schedule entry per veterinarian per weekday
        manager
            .create_index(
                Index::create()
                    .name("idx_veterinarian_schedule_vet_day")
                    .table(VeterinarianSchedule::Table)
                    .col(VeterinarianSchedule::VeterinarianId)
                    .col(VeterinarianSchedule::Day)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VeterinarianSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VeterinarianSchedule {
    Table,
    ScheduleId,
    Day,
    TimeStart,
    TimeEnd,
    VeterinarianId,
}
