//! User entity - Represents an account in the internship platform.
//!
//! Every person in the system (candidates, trainees, mentors, personnel,
//! curators, admins) is a user; the role field drives authorization and is
//! mutated by the selection finalizer when a candidate is promoted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform role. The single-letter database values match the original
/// production schema ("F" as in first-timer for candidates).
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Role {
    /// Applicant who has not yet been selected
    #[sea_orm(string_value = "F")]
    Candidate,
    /// Selected intern
    #[sea_orm(string_value = "T")]
    Trainee,
    /// Supervises trainees at a work placement
    #[sea_orm(string_value = "M")]
    Mentor,
    /// HR staff managing vacancies
    #[sea_orm(string_value = "P")]
    Personnel,
    /// Runs the selection process
    #[sea_orm(string_value = "C")]
    Curator,
    /// Full access
    #[sea_orm(string_value = "A")]
    Admin,
}

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name; the original system mirrors it into email on creation
    #[sea_orm(unique)]
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Platform role, drives authorization decisions
    pub role: Role,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A candidate or trainee owns exactly one trainee profile
    #[sea_orm(has_one = "super::trainee_profile::Entity")]
    TraineeProfile,
    /// A candidate owns at most one internship application
    #[sea_orm(has_one = "super::internship_application::Entity")]
    InternshipApplication,
}

impl Related<super::trainee_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TraineeProfile.def()
    }
}

impl Related<super::internship_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InternshipApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
