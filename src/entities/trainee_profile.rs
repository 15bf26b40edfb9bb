//! Trainee profile entity - The extended applicant record.
//!
//! Holds everything the selection process scores and filters on: citizenship,
//! qualification status and the CV/test scores. The profile shares its primary
//! key with the owning user (1:1) and owns the education and work-experience
//! history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of the external qualification process. Only profiles that PASSED
/// take part in ranking and selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(11))")]
pub enum QualifyingStatus {
    /// Qualification passed, profile is rankable
    #[sea_orm(string_value = "PASSED")]
    Passed,
    /// Qualification still running
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    /// Qualification failed
    #[sea_orm(string_value = "FAILED")]
    Failed,
}

/// Self-reported sex
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum Sex {
    /// Male
    #[sea_orm(string_value = "M")]
    Male,
    /// Female
    #[sea_orm(string_value = "F")]
    Female,
}

/// Trainee profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trainee_profiles")]
pub struct Model {
    /// Owning user id; the profile shares its primary key with the user
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    /// Citizenship country, None when the applicant has not filled it in
    pub citizenship_id: Option<i64>,
    /// Free-form self description
    pub bio: String,
    /// Contact phone number
    pub phone_number: Option<String>,
    /// Self-reported sex
    pub sex: Option<Sex>,
    /// Date of birth
    pub birth_date: Option<Date>,
    /// Status of the external qualification process
    pub qualifying_status: QualifyingStatus,
    /// CV review score, 0..=100
    pub cv_score: i32,
    /// Qualification test score, 0..=100
    pub test_score: i32,
}

impl Model {
    /// Combined ranking score.
    #[must_use]
    pub const fn total_score(&self) -> i32 {
        self.cv_score + self.test_score
    }
}

/// Defines relationships between TraineeProfile and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The user this profile belongs to
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Citizenship country
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CitizenshipId",
        to = "super::country::Column::Id"
    )]
    Citizenship,
    /// One profile has many education records
    #[sea_orm(has_many = "super::education::Entity")]
    Educations,
    /// One profile has many work-experience records
    #[sea_orm(has_many = "super::work_experience::Entity")]
    WorkExperiences,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizenship.def()
    }
}

impl Related<super::education::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Educations.def()
    }
}

impl Related<super::work_experience::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkExperiences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
