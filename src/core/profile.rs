//! Trainee profile business logic.
//!
//! Covers the profile-store operations the selection core depends on:
//! candidate registration (user plus empty profile in one transaction),
//! score updates with range validation, qualification-status changes, and
//! wholesale replacement of the education and work-experience history. The
//! history is never edited row by row; profile updates submit the full list
//! and the old rows are dropped.

use crate::{
    entities::{
        Education, TraineeProfile, User, WorkExperience, education,
        education::{Degree, EducationType},
        trainee_profile,
        trainee_profile::QualifyingStatus,
        user,
        user::Role,
        work_experience,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Incoming education record for a profile replace.
#[derive(Debug, Clone)]
pub struct NewEducation {
    /// Institution name
    pub name: String,
    /// Kind of institution
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

/// Incoming work-experience record for a profile replace.
#[derive(Debug, Clone)]
pub struct NewWorkExperience {
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

/// Registers a new candidate: creates the user (role CANDIDATE, email
/// mirrored from the username) and the empty trainee profile in one
/// transaction, so a user with a missing profile can never be observed.
pub async fn register_candidate(
    db: &DatabaseConnection,
    username: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(user::Model, trainee_profile::Model)> {
    if username.trim().is_empty() {
        return Err(Error::Config {
            message: "Username cannot be empty".to_string(),
        });
    }

    let txn = db.begin().await?;

    let user = user::ActiveModel {
        username: Set(username.trim().to_string()),
        email: Set(username.trim().to_string()),
        first_name: Set(first_name.to_string()),
        last_name: Set(last_name.to_string()),
        role: Set(Role::Candidate),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let profile = trainee_profile::ActiveModel {
        user_id: Set(user.id),
        bio: Set(String::new()),
        qualifying_status: Set(QualifyingStatus::InProgress),
        cv_score: Set(0),
        test_score: Set(0),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok((user, profile))
}

/// Writes new CV and test scores onto a profile, rejecting values outside
/// 0..=100.
pub async fn update_scores(
    db: &DatabaseConnection,
    user_id: i64,
    cv_score: i32,
    test_score: i32,
) -> Result<trainee_profile::Model> {
    for value in [cv_score, test_score] {
        if !(0..=100).contains(&value) {
            return Err(Error::InvalidScore { value });
        }
    }

    let profile = find_profile(db, user_id).await?;
    let mut active: trainee_profile::ActiveModel = profile.into();
    active.cv_score = Set(cv_score);
    active.test_score = Set(test_score);
    active.update(db).await.map_err(Into::into)
}

/// Records the outcome of the external qualification process.
pub async fn set_qualifying_status(
    db: &DatabaseConnection,
    user_id: i64,
    status: QualifyingStatus,
) -> Result<trainee_profile::Model> {
    let profile = find_profile(db, user_id).await?;
    let mut active: trainee_profile::ActiveModel = profile.into();
    active.qualifying_status = Set(status);
    active.update(db).await.map_err(Into::into)
}

/// Sets or clears the citizenship reference on a profile.
pub async fn set_citizenship(
    db: &DatabaseConnection,
    user_id: i64,
    citizenship_id: Option<i64>,
) -> Result<trainee_profile::Model> {
    let profile = find_profile(db, user_id).await?;
    let mut active: trainee_profile::ActiveModel = profile.into();
    active.citizenship_id = Set(citizenship_id);
    active.update(db).await.map_err(Into::into)
}

/// Replaces the full education history of a profile.
///
/// Deletes the existing rows and inserts the submitted ones in a single
/// transaction; an invalid entry leaves the old history untouched.
pub async fn replace_educations(
    db: &DatabaseConnection,
    user_id: i64,
    entries: Vec<NewEducation>,
) -> Result<Vec<education::Model>> {
    for entry in &entries {
        if let Some(end_year) = entry.end_year
            && end_year < entry.start_year
        {
            return Err(Error::InvalidEducationYears {
                start_year: entry.start_year,
                end_year,
            });
        }
    }

    find_profile(db, user_id).await?;

    let txn = db.begin().await?;

    Education::delete_many()
        .filter(education::Column::ProfileId.eq(user_id))
        .exec(&txn)
        .await?;

    if !entries.is_empty() {
        let rows = entries.into_iter().map(|entry| education::ActiveModel {
            profile_id: Set(user_id),
            name: Set(entry.name),
            kind: Set(entry.kind),
            degree: Set(entry.degree),
            start_year: Set(entry.start_year),
            end_year: Set(entry.end_year),
            specialization: Set(entry.specialization),
            description: Set(entry.description),
            ..Default::default()
        });
        Education::insert_many(rows).exec(&txn).await?;
    }

    txn.commit().await?;

    Education::find()
        .filter(education::Column::ProfileId.eq(user_id))
        .order_by_asc(education::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Replaces the full work-experience history of a profile, mirroring
/// [`replace_educations`].
pub async fn replace_work_experiences(
    db: &DatabaseConnection,
    user_id: i64,
    entries: Vec<NewWorkExperience>,
) -> Result<Vec<work_experience::Model>> {
    find_profile(db, user_id).await?;

    let txn = db.begin().await?;

    WorkExperience::delete_many()
        .filter(work_experience::Column::ProfileId.eq(user_id))
        .exec(&txn)
        .await?;

    if !entries.is_empty() {
        let rows = entries
            .into_iter()
            .map(|entry| work_experience::ActiveModel {
                profile_id: Set(user_id),
                employer: Set(entry.employer),
                position: Set(entry.position),
                start_date: Set(entry.start_date),
                end_date: Set(entry.end_date),
                description: Set(entry.description),
                ..Default::default()
            });
        WorkExperience::insert_many(rows).exec(&txn).await?;
    }

    txn.commit().await?;

    WorkExperience::find()
        .filter(work_experience::Column::ProfileId.eq(user_id))
        .order_by_asc(work_experience::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Looks up a user by id.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

async fn find_profile(db: &DatabaseConnection, user_id: i64) -> Result<trainee_profile::Model> {
    TraineeProfile::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::ProfileNotFound { user_id })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_register_candidate_creates_user_and_profile() -> Result<()> {
        let db = setup_test_db().await?;

        let (user, profile) = register_candidate(&db, "ivan.petrov", "Ivan", "Petrov").await?;

        assert_eq!(user.role, Role::Candidate);
        assert_eq!(user.email, "ivan.petrov");
        assert_eq!(profile.user_id, user.id);
        assert_eq!(profile.qualifying_status, QualifyingStatus::InProgress);
        assert_eq!(profile.cv_score, 0);
        assert_eq!(profile.test_score, 0);
        assert!(profile.citizenship_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_register_candidate_rejects_empty_username() -> Result<()> {
        // Validation fires before any query, so a mock connection suffices
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = register_candidate(&db, "", "No", "Name").await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let result = register_candidate(&db, "   ", "No", "Name").await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_scores_persists() -> Result<()> {
        let db = setup_test_db().await?;
        let (user, _) = create_test_candidate(&db, "scored").await?;

        let profile = update_scores(&db, user.id, 77, 88).await?;
        assert_eq!(profile.cv_score, 77);
        assert_eq!(profile.test_score, 88);
        assert_eq!(profile.total_score(), 165);

        let stored = TraineeProfile::find_by_id(user.id).one(&db).await?.unwrap();
        assert_eq!(stored.cv_score, 77);
        assert_eq!(stored.test_score, 88);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_scores_rejects_out_of_range() -> Result<()> {
        let db = setup_test_db().await?;
        let (user, _) = create_test_candidate(&db, "scored").await?;

        let result = update_scores(&db, user.id, 101, 50).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidScore { value: 101 }
        ));

        let result = update_scores(&db, user.id, 50, -1).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidScore { value: -1 }
        ));

        // Nothing was written along the way
        let stored = TraineeProfile::find_by_id(user.id).one(&db).await?.unwrap();
        assert_eq!(stored.cv_score, 0);
        assert_eq!(stored.test_score, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_scores_missing_profile() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_scores(&db, 404, 10, 10).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProfileNotFound { user_id: 404 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_educations_swaps_history() -> Result<()> {
        let db = setup_test_db().await?;
        let (user, _) = create_test_candidate(&db, "student").await?;
        add_bachelor_education(&db, user.id, 2015, Some(2019)).await?;

        let replaced = replace_educations(
            &db,
            user.id,
            vec![NewEducation {
                name: "State University".to_string(),
                kind: EducationType::University,
                degree: Some(Degree::Master),
                start_year: 2019,
                end_year: Some(2021),
                specialization: "Applied Math".to_string(),
                description: None,
            }],
        )
        .await?;

        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].degree, Some(Degree::Master));

        let stored = Education::find()
            .filter(education::Column::ProfileId.eq(user.id))
            .all(&db)
            .await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].start_year, 2019);

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_educations_with_empty_list_clears() -> Result<()> {
        let db = setup_test_db().await?;
        let (user, _) = create_test_candidate(&db, "student").await?;
        add_bachelor_education(&db, user.id, 2015, None).await?;

        let replaced = replace_educations(&db, user.id, vec![]).await?;
        assert!(replaced.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_educations_rejects_inverted_years() -> Result<()> {
        let db = setup_test_db().await?;
        let (user, _) = create_test_candidate(&db, "student").await?;
        add_bachelor_education(&db, user.id, 2015, None).await?;

        let result = replace_educations(
            &db,
            user.id,
            vec![NewEducation {
                name: "Broken".to_string(),
                kind: EducationType::University,
                degree: Some(Degree::Bachelor),
                start_year: 2020,
                end_year: Some(2018),
                specialization: "None".to_string(),
                description: None,
            }],
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidEducationYears {
                start_year: 2020,
                end_year: 2018
            }
        ));

        // Old history survived the rejected replace
        let stored = Education::find()
            .filter(education::Column::ProfileId.eq(user.id))
            .all(&db)
            .await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].start_year, 2015);

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_work_experiences() -> Result<()> {
        let db = setup_test_db().await?;
        let (user, _) = create_test_candidate(&db, "worker").await?;

        let replaced = replace_work_experiences(
            &db,
            user.id,
            vec![NewWorkExperience {
                employer: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: chrono::NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
                end_date: None,
                description: "Backend work".to_string(),
            }],
        )
        .await?;
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].employer, "Acme");

        let cleared = replace_work_experiences(&db, user.id, vec![]).await?;
        assert!(cleared.is_empty());

        Ok(())
    }
}
