//! Candidate rating business logic.
//!
//! Produces the ordered list curators review before closing a selection
//! round. Only profiles whose qualification PASSED appear; everyone else is
//! excluded outright, not just sorted last. The rating is recomputed on
//! every call because scores keep changing while qualification runs.

use crate::{
    entities::{TraineeProfile, trainee_profile, trainee_profile::QualifyingStatus, user},
    errors::Result,
};
use sea_orm::prelude::*;
use serde::Serialize;

/// One row of the curator-facing rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedProfile {
    /// Id of the user owning the profile
    pub user_id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Date of birth, if provided
    pub birth_date: Option<Date>,
    /// Self-reported sex, if provided
    pub sex: Option<trainee_profile::Sex>,
    /// CV review score
    pub cv_score: i32,
    /// Qualification test score
    pub test_score: i32,
    /// `cv_score + test_score`, the ranking key
    pub total_score: i32,
}

/// Ranks all qualified profiles by combined score, best first.
///
/// Ties are broken by user id ascending so that the order is deterministic
/// and does not depend on storage order.
pub async fn rank_qualified<C>(db: &C) -> Result<Vec<RatedProfile>>
where
    C: ConnectionTrait,
{
    let rows = TraineeProfile::find()
        .filter(trainee_profile::Column::QualifyingStatus.eq(QualifyingStatus::Passed))
        .find_also_related(user::Entity)
        .all(db)
        .await?;

    let mut rated: Vec<RatedProfile> = rows
        .into_iter()
        .filter_map(|(profile, user)| {
            // A profile without its user is an orphaned row; skip it rather
            // than fail the whole rating.
            let user = user?;
            Some(RatedProfile {
                user_id: profile.user_id,
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
                birth_date: profile.birth_date,
                sex: profile.sex,
                cv_score: profile.cv_score,
                test_score: profile.test_score,
                total_score: profile.total_score(),
            })
        })
        .collect();

    rated.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then(a.user_id.cmp(&b.user_id))
    });

    Ok(rated)
}
