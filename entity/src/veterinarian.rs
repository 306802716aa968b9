use sea_orm::entity::prelude::*;

/// A licensed veterinarian.
///
/// Rows are provisioned by an admin with a license number and no user link. A registering
/// veterinarian claims the row by supplying the license, which sets `user_id` exactly once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "veterinarian")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub veterinarian_id: i32,
    #[sea_orm(unique)]
    pub license_no: String,
    #[sea_orm(unique)]
    pub user_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::veterinarian_clinic::Entity")]
    VeterinarianClinic,
    #[sea_orm(has_many = "super::veterinarian_schedule::Entity")]
    VeterinarianSchedule,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::veterinarian_clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VeterinarianClinic.def()
    }
}

impl Related<super::veterinarian_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VeterinarianSchedule.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
