//! Country entity - Citizenship referent for trainee profiles.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Country database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    /// Unique identifier for the country
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Country name
    #[sea_orm(unique)]
    pub name: String,
}

/// Defines relationships between Country and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One country is the citizenship of many trainee profiles
    #[sea_orm(has_many = "super::trainee_profile::Entity")]
    TraineeProfiles,
}

impl Related<super::trainee_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraineeProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
