//! `SeaORM` Entity for the households table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A household: the tenant and unit of data isolation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "households")]
pub struct Model {
    /// Surrogate id, assigned at creation.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Case-sensitive display name, used as the login handle.
    #[sea_orm(unique)]
    pub family_name: String,
    /// Argon2id PHC hash. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::family_members::Entity")]
    FamilyMembers,
    #[sea_orm(has_many = "super::loans::Entity")]
    Loans,
}

impl Related<super::family_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FamilyMembers.def()
    }
}

impl Related<super::loans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Loans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
