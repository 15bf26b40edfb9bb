//! Recommendation evaluation business logic.
//!
//! An application is recommended when the applicant holds the preferred
//! citizenship and their education history passes the university-tenure rule.
//! The result is persisted on the application as a derived flag; review
//! status is never touched here. Non-recommendation is an expected outcome,
//! not an error.

use crate::{
    config::SelectionConfig,
    core::eligibility::is_eligible_education,
    entities::{
        Education, InternshipApplication, TraineeProfile, education,
        education::{Degree, EducationType},
        internship_application,
    },
    errors::{Error, Result},
};
use chrono::{Datelike, Utc};
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// Recomputes the recommendation flag for an application, persists it, and
/// returns the new value.
///
/// Fails with [`Error::ApplicationNotFound`] / [`Error::ProfileNotFound`]
/// when the referenced rows are missing and with [`Error::Config`] when the
/// selection rules are invalid; both are caller bugs or deployment problems,
/// never user input errors.
pub async fn evaluate_recommendation(
    db: &DatabaseConnection,
    config: &SelectionConfig,
    applicant_id: i64,
) -> Result<bool> {
    config.validate()?;

    let application = InternshipApplication::find_by_id(applicant_id)
        .one(db)
        .await?
        .ok_or(Error::ApplicationNotFound {
            user_id: applicant_id,
        })?;

    let recommended = compute_recommendation(db, config, applicant_id).await?;

    let mut active: internship_application::ActiveModel = application.into();
    active.is_recommended = Set(Some(recommended));
    active.update(db).await?;

    debug!(applicant_id, recommended, "recommendation recomputed");
    Ok(recommended)
}

/// Applies the citizenship gate and the education rule without persisting
/// anything.
async fn compute_recommendation(
    db: &DatabaseConnection,
    config: &SelectionConfig,
    applicant_id: i64,
) -> Result<bool> {
    let profile = TraineeProfile::find_by_id(applicant_id)
        .one(db)
        .await?
        .ok_or(Error::ProfileNotFound {
            user_id: applicant_id,
        })?;

    // Unset citizenship never matches the preferred one
    if profile.citizenship_id != Some(config.preferred_citizenship_id) {
        return Ok(false);
    }

    // Narrow at the query layer; the pure predicate re-checks the same
    // conditions, so passing a pre-filtered set is just an optimization.
    let educations = Education::find()
        .filter(education::Column::ProfileId.eq(applicant_id))
        .filter(education::Column::Kind.eq(EducationType::University))
        .filter(education::Column::Degree.eq(Degree::Bachelor))
        .all(db)
        .await?;

    // TODO: factor job-experience relevance into the rule
    Ok(is_eligible_education(
        &educations,
        Utc::now().year(),
        config.required_university_years,
    ))
}
