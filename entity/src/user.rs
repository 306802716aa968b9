use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone_no: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_role::Entity")]
    UserRole,
    #[sea_orm(has_many = "super::pet_owner::Entity")]
    PetOwner,
    #[sea_orm(has_one = "super::veterinarian::Entity")]
    Veterinarian,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl Related<super::pet_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetOwner.def()
    }
}

impl Related<super::veterinarian::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Veterinarian.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
