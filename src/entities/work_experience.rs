//! Work experience entity - One entry in a profile's employment history.
//!
//! Consumed only by the statistics module; the recommendation rule carries a
//! known gap here (job-experience relevance is not checked).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Work experience database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_experiences")]
pub struct Model {
    /// Unique identifier for the work-experience record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Profile this record belongs to
    pub profile_id: i64,
    /// Employer name
    pub employer: String,
    /// Position held
    pub position: String,
    /// First day of employment
    pub start_date: Date,
    /// Last day of employment, None while still employed
    pub end_date: Option<Date>,
    /// Responsibilities description
    pub description: String,
}

/// Defines relationships between WorkExperience and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The owning trainee profile
    #[sea_orm(
        belongs_to = "super::trainee_profile::Entity",
        from = "Column::ProfileId",
        to = "super::trainee_profile::Column::UserId"
    )]
    Profile,
}

impl Related<super::trainee_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
