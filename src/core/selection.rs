//! Selection finalization business logic.
//!
//! Closing a selection round means promoting the top of the rating and
//! rejecting everyone else, in one atomic unit of work. This is the only
//! operation in the system that mutates two tables together (application
//! statuses and user roles), so it runs inside a single database
//! transaction; a failure in either bulk write rolls back both.

use crate::{
    config::SelectionConfig,
    core::rating,
    entities::{
        InternshipApplication, User, internship_application,
        internship_application::ApplicationStatus, user, user::Role,
    },
    errors::Result,
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use serde::Serialize;
use tracing::info;

/// Result of closing a selection round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    /// Number of qualified profiles considered. When fewer profiles qualify
    /// than the quota allows, every one of them is promoted and this count
    /// is below the quota.
    pub count: usize,
}

/// Closes the current selection round.
///
/// Ranks all qualified profiles, promotes the top `selection_quota` of them
/// (application APPROVED, user role TRAINEE) and rejects the rest
/// (application REJECTED, role untouched). Both bulk writes happen in one
/// transaction.
///
/// Nothing records that a round was already closed: running this twice
/// re-ranks the same pool and re-writes the same outcome. Callers that need
/// once-per-cycle semantics must enforce them at the boundary.
pub async fn finalize_selection(
    db: &DatabaseConnection,
    config: &SelectionConfig,
) -> Result<SelectionOutcome> {
    // One transaction around ranking and both bulk writes; concurrent
    // finalizations serialize on the write scope instead of double-promoting.
    let txn = db.begin().await?;

    let ranked = rating::rank_qualified(&txn).await?;

    let promoted: Vec<i64> = ranked
        .iter()
        .take(config.selection_quota)
        .map(|row| row.user_id)
        .collect();
    let rejected: Vec<i64> = ranked
        .iter()
        .skip(config.selection_quota)
        .map(|row| row.user_id)
        .collect();

    if !promoted.is_empty() {
        InternshipApplication::update_many()
            .set(internship_application::ActiveModel {
                status: Set(ApplicationStatus::Approved),
                ..Default::default()
            })
            .filter(internship_application::Column::ApplicantId.is_in(promoted.clone()))
            .exec(&txn)
            .await?;

        User::update_many()
            .set(user::ActiveModel {
                role: Set(Role::Trainee),
                ..Default::default()
            })
            .filter(user::Column::Id.is_in(promoted.clone()))
            .exec(&txn)
            .await?;
    }

    if !rejected.is_empty() {
        InternshipApplication::update_many()
            .set(internship_application::ActiveModel {
                status: Set(ApplicationStatus::Rejected),
                ..Default::default()
            })
            .filter(internship_application::Column::ApplicantId.is_in(rejected.clone()))
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;

    info!(
        considered = ranked.len(),
        promoted = promoted.len(),
        rejected = rejected.len(),
        "selection round finalized"
    );

    Ok(SelectionOutcome {
        count: ranked.len(),
    })
}
