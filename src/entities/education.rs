//! Education entity - One entry in a profile's education history.
//!
//! Education rows are replaced wholesale when a profile is updated; they are
//! never edited individually. The recommendation rule only looks at
//! university bachelor's degrees.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of educational institution
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EducationType {
    /// Secondary school
    #[sea_orm(string_value = "school")]
    School,
    /// University
    #[sea_orm(string_value = "university")]
    University,
    /// College
    #[sea_orm(string_value = "college")]
    College,
}

/// Degree pursued or obtained
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(100))")]
pub enum Degree {
    /// Bachelor's degree
    #[sea_orm(string_value = "Bachelor")]
    Bachelor,
    /// Master's degree
    #[sea_orm(string_value = "Master")]
    Master,
    /// Doctorate
    #[sea_orm(string_value = "Doctorate")]
    Doctorate,
}

/// Education database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    /// Unique identifier for the education record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Profile this record belongs to
    pub profile_id: i64,
    /// Institution name
    pub name: String,
    /// Kind of institution
    #[sea_orm(column_name = "type")]
    pub kind: EducationType,
    /// Degree, None for school-level education
    pub degree: Option<Degree>,
    /// Year the education started
    pub start_year: i32,
    /// Year the education ended, None while still enrolled
    pub end_year: Option<i32>,
    /// Field of study
    pub specialization: String,
    /// Optional free-form notes
    pub description: Option<String>,
}

/// Defines relationships between Education and other entities
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
