use sea_orm::entity::prelude::*;

/// Pairing of a veterinarian with a clinic they practice at. Appointments may only reference
/// (veterinarian, clinic) combinations present here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "veterinarian_clinic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub veterinarian_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub clinic_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::veterinarian::Entity",
        from = "Column::VeterinarianId",
        to = "super::veterinarian::Column::VeterinarianId",
        on_delete = "Cascade"
    )]
    Veterinarian,
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to = "super::clinic::Column::ClinicId",
        on_delete = "Cascade"
    )]
    Clinic,
}

impl Related<super::veterinarian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Veterinarian.def()
    }
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
