//! Aggregate queries behind the admin reports.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::server::model::report::{ClinicCount, StatusCount};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Number of appointments per status, ordered by status.
    pub async fn appointment_status_counts(&self) -> Result<Vec<StatusCount>, DbErr> {
        entity::prelude::Appointment::find()
            .select_only()
            .column(entity::appointment::Column::Status)
            .column_as(entity::appointment::Column::AppointmentId.count(), "total")
            .group_by(entity::appointment::Column::Status)
            .order_by_asc(entity::appointment::Column::Status)
            .into_model::<StatusCount>()
            .all(self.db)
            .await
    }

    /// Number of appointments per clinic, ordered by clinic name. Clinics without
    /// appointments are omitted.
    pub async fn appointment_clinic_counts(&self) -> Result<Vec<ClinicCount>, DbErr> {
        entity::prelude::Appointment::find()
            .select_only()
            .column_as(entity::clinic::Column::Name, "clinic")
            .column_as(entity::appointment::Column::AppointmentId.count(), "total")
            .join(JoinType::InnerJoin, entity::appointment::Relation::Clinic.def())
            .group_by(entity::clinic::Column::ClinicId)
            .group_by(entity::clinic::Column::Name)
            .order_by_asc(entity::clinic::Column::Name)
            .into_model::<ClinicCount>()
            .all(self.db)
            .await
    }
}
