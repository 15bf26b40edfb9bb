//! Internship application entity - A candidate's application to the program.
//!
//! Shares its primary key with the applicant user (1:1). The recommendation
//! flag is derived data, recomputed by the recommendation evaluator; the
//! status is written by curators and by the selection finalizer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Application review status.
///
/// The finalizer only ever writes `Approved` or `Rejected`; the intermediate
/// states are set by curators during review.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(255))")]
pub enum ApplicationStatus {
    /// Awaiting review
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Rejected, terminal
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Passed review, admitted to the qualification stage
    #[sea_orm(string_value = "next_stage")]
    NextStage,
    /// Selected for the internship, terminal
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Failed the qualification stage
    #[sea_orm(string_value = "not_qualify")]
    NotQualify,
}

/// Internship application database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "internship_applications")]
pub struct Model {
    /// Applicant user id; the application shares its primary key with the user
    #[sea_orm(primary_key, auto_increment = false)]
    pub applicant_id: i64,
    /// Derived citizenship + education eligibility flag; None until first computed
    pub is_recommended: Option<bool>,
    /// When the application was submitted
    pub created_at: DateTimeUtc,
    /// Current review status
    pub status: ApplicationStatus,
    /// When the status last changed, None while still pending
    pub status_changed_at: Option<DateTimeUtc>,
    /// Reviewer who last changed the status
    pub status_changed_by: Option<i64>,
    /// Internship track the applicant applied to
    pub direction_id: Option<i64>,
}

/// Defines relationships between InternshipApplication and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The applying user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ApplicantId",
        to = "super::user::Column::Id"
    )]
    Applicant,
    /// The reviewer who last changed the status
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StatusChangedBy",
        to = "super::user::Column::Id"
    )]
    StatusChangedBy,
    /// Internship track
    #[sea_orm(
        belongs_to = "super::direction::Entity",
        from = "Column::DirectionId",
        to = "super::direction::Column::Id"
    )]
    Direction,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applicant.def()
    }
}

impl Related<super::direction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Direction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
