use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pet_id: i32,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub gender: String,
    pub birth_date: Option<Date>,
    pub age: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pet_owner::Entity")]
    PetOwner,
    #[sea_orm(has_many = "super::appointment::Entity")]
    Appointment,
}

impl Related<super::pet_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetOwner.def()
    }
}

impl Related<super::appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
