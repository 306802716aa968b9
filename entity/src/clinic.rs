use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clinic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub clinic_id: i32,
    pub name: String,
    pub phone_no: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::veterinarian_clinic::Entity")]
    VeterinarianClinic,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::veterinarian_clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VeterinarianClinic.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
