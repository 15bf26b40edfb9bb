//! Direction entity - An internship track applications can be grouped under.
//!
//! Directions are a grouping dimension only; they never influence scoring
//! or selection.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "directions")]
pub struct Model {
    /// Unique identifier for the direction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Track name (e.g. "Backend development")
    pub name: String,
}

/// Defines relationships between Direction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One direction groups many applications
    #[sea_orm(has_many = "super::internship_application::Entity")]
    InternshipApplications,
}

impl Related<super::internship_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternshipApplications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
