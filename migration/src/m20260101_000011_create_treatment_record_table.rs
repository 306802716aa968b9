use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000010_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TreatmentRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(TreatmentRecord::RecordId))
                    .col(date_null(TreatmentRecord::Date))
                    .col(text(TreatmentRecord::Diagnosis))
                    .col(text(TreatmentRecord::Note).default(""))
                    .col(integer_uniq(TreatmentRecord::AppointmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_treatment_record_appointment_id")
                            .from(TreatmentRecord::Table, TreatmentRecord::AppointmentId)
                            .to(Appointment::Table, Appointment::AppointmentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TreatmentRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TreatmentRecord {
    Table,
    RecordId,
    Date,
    Diagnosis,
    Note,
    AppointmentId,
}
