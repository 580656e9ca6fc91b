use sea_orm::entity::prelude::*;

/// User identity record.
///
/// `id` is the internal sequence id and never leaves the store; everything
/// else keys on `ref_id`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub ref_id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub initials: String,
    pub global: bool,
    pub password: String,
    pub salt: String,
    pub reset: String,
    pub created: chrono::DateTime<chrono::Utc>,
    pub revised: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accounts::Entity")]
    Accounts,
    #[sea_orm(has_many = "super::label_roles::Entity")]
    LabelRoles,
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::label_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabelRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
