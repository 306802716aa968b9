use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub appointment_id: i32,
    pub datetime: DateTime,
    pub status: String,
    pub pet_id: i32,
    pub clinic_id: i32,
    pub veterinarian_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::PetId",
        on_delete = "Cascade"
    )]
    Pet,
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to = "super::clinic::Column::ClinicId"
    )]
    Clinic,
    #[sea_orm(
        belongs_to = "super::veterinarian::Entity",
        from = "Column::VeterinarianId",
        to = "super::veterinarian::Column::VeterinarianId"
    )]
    Veterinarian,
    #[sea_orm(has_one = "super::treatment_record::Entity")]
    TreatmentRecord,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinic.def()
    }
}

impl Related<super::veterinarian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Veterinarian.def()
    }
}

impl Related<super::treatment_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TreatmentRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
