use sea_orm::entity::prelude::*;

/// Weekly availability of a veterinarian. `day` is stored lower-case and is unique per
/// veterinarian (enforced by the `idx_veterinarian_schedule_vet_day` index).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "veterinarian_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub schedule_id: i32,
    pub day: String,
    pub time_start: Time,
    pub time_end: Time,
    pub veterinarian_id: i32,
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
}

impl Related<super::veterinarian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Veterinarian.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
