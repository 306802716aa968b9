use sea_orm::entity::prelude::*;

/// Diagnosis and notes for an appointment. At most one record per appointment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "treatment_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub record_id: i32,
    pub date: Option<Date>,
    pub diagnosis: String,
    pub note: String,
    #[sea_orm(unique)]
    pub appointment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment::Entity",
        from = "Column::AppointmentId",
        to = "super::appointment::Column::AppointmentId",
        on_delete = "Cascade"
    )]
    Appointment,
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
