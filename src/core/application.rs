//! Internship application business logic.
//!
//! Applications are created once per candidate (the table shares its primary
//! key with the user) and start out PENDING with the recommendation flag
//! computed as part of creation. Review-status transitions stamp who changed
//! the status and when; the selection finalizer bypasses this path on
//! purpose, it only rewrites the status field in bulk.

use crate::{
    config::SelectionConfig,
    core::recommendation,
    entities::{
        InternshipApplication, TraineeProfile, internship_application,
        internship_application::ApplicationStatus,
    },
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Creates an application for a candidate and computes the initial
/// recommendation flag.
///
/// The applicant must already have a trainee profile; a second application
/// for the same user fails on the primary-key constraint.
pub async fn submit_application(
    db: &DatabaseConnection,
    config: &SelectionConfig,
    applicant_id: i64,
    direction_id: Option<i64>,
) -> Result<internship_application::Model> {
    TraineeProfile::find_by_id(applicant_id)
        .one(db)
        .await?
        .ok_or(Error::ProfileNotFound {
            user_id: applicant_id,
        })?;

    internship_application::ActiveModel {
        applicant_id: Set(applicant_id),
        created_at: Set(Utc::now()),
        status: Set(ApplicationStatus::Pending),
        direction_id: Set(direction_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    // Recommendation is part of creation, not a separate step
    recommendation::evaluate_recommendation(db, config, applicant_id).await?;

    info!(applicant_id, "internship application submitted");

    InternshipApplication::find_by_id(applicant_id)
        .one(db)
        .await?
        .ok_or(Error::ApplicationNotFound {
            user_id: applicant_id,
        })
}

/// Moves an application to a new review status, recording the reviewer and
/// the transition time.
///
/// No transition validation happens here: the review flow allows curators to
/// move an application between any of the states, matching the production
/// behavior this system models.
pub async fn set_status(
    db: &DatabaseConnection,
    applicant_id: i64,
    status: ApplicationStatus,
    changed_by: i64,
) -> Result<internship_application::Model> {
    let application = InternshipApplication::find_by_id(applicant_id)
        .one(db)
        .await?
        .ok_or(Error::ApplicationNotFound {
            user_id: applicant_id,
        })?;

    let mut active: internship_application::ActiveModel = application.into();
    active.status = Set(status);
    active.status_changed_at = Set(Some(Utc::now()));
    active.status_changed_by = Set(Some(changed_by));
    active.update(db).await.map_err(Into::into)
}

/// Looks up an application by its applicant id.
pub async fn get_application(
    db: &DatabaseConnection,
    applicant_id: i64,
) -> Result<Option<internship_application::Model>> {
    InternshipApplication::find_by_id(applicant_id)
        .one(db)
        .await
        .map_err(Into::into)
}
