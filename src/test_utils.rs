//! Shared test utilities for `internhub`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::SelectionConfig,
    core::{application, profile},
    entities::{
        self, country, direction,
        education::{Degree, EducationType},
        trainee_profile::QualifyingStatus,
    },
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Sets up a database plus a selection config wired to a freshly created
/// preferred country. Returns (db, config, country).
///
/// # Defaults
/// * `required_university_years`: 4
/// * `selection_quota`: 30
pub async fn setup_with_config() -> Result<(
    DatabaseConnection,
    SelectionConfig,
    entities::country::Model,
)> {
    let db = setup_test_db().await?;
    let country = create_test_country(&db, "Preferable country").await?;
    let config = SelectionConfig {
        preferred_citizenship_id: country.id,
        required_university_years: 4,
        selection_quota: 30,
    };
    Ok((db, config, country))
}

/// Creates a country row.
pub async fn create_test_country(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::country::Model> {
    country::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a direction row.
pub async fn create_test_direction(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::direction::Model> {
    direction::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Registers a candidate with placeholder names.
pub async fn create_test_candidate(
    db: &DatabaseConnection,
    username: &str,
) -> Result<(entities::user::Model, entities::trainee_profile::Model)> {
    profile::register_candidate(db, username, "Test", "User").await
}

/// Registers a candidate and submits their application.
pub async fn create_test_applicant(
    db: &DatabaseConnection,
    config: &SelectionConfig,
    username: &str,
) -> Result<(
    entities::user::Model,
    entities::internship_application::Model,
)> {
    let (user, _profile) = create_test_candidate(db, username).await?;
    let application = application::submit_application(db, config, user.id, None).await?;
    Ok((user, application))
}

/// Sets or clears a profile's citizenship.
pub async fn set_citizenship(
    db: &DatabaseConnection,
    user_id: i64,
    citizenship_id: Option<i64>,
) -> Result<()> {
    profile::set_citizenship(db, user_id, citizenship_id).await?;
    Ok(())
}

/// Sets a profile's qualification status.
pub async fn set_qualifying_status(
    db: &DatabaseConnection,
    user_id: i64,
    status: QualifyingStatus,
) -> Result<()> {
    profile::set_qualifying_status(db, user_id, status).await?;
    Ok(())
}

/// Marks a profile as PASSED with the given scores, making it rankable.
pub async fn qualify(
    db: &DatabaseConnection,
    user_id: i64,
    cv_score: i32,
    test_score: i32,
) -> Result<()> {
    profile::update_scores(db, user_id, cv_score, test_score).await?;
    profile::set_qualifying_status(db, user_id, QualifyingStatus::Passed).await?;
    Ok(())
}

/// Adds a university bachelor's education record, the kind the
/// recommendation rule looks for.
pub async fn add_bachelor_education(
    db: &DatabaseConnection,
    profile_id: i64,
    start_year: i32,
    end_year: Option<i32>,
) -> Result<entities::education::Model> {
    add_education(
        db,
        profile_id,
        EducationType::University,
        Some(Degree::Bachelor),
        start_year,
        end_year,
    )
    .await
}

/// Adds an education record with custom parameters.
pub async fn add_education(
    db: &DatabaseConnection,
    profile_id: i64,
    kind: EducationType,
    degree: Option<Degree>,
    start_year: i32,
    end_year: Option<i32>,
) -> Result<entities::education::Model> {
    entities::education::ActiveModel {
        profile_id: Set(profile_id),
        name: Set("Test University".to_string()),
        kind: Set(kind),
        degree: Set(degree),
        start_year: Set(start_year),
        end_year: Set(end_year),
        specialization: Set("Computer Science".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Fetches an application by applicant id, failing the test if missing.
pub async fn find_application(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entities::internship_application::Model> {
    entities::InternshipApplication::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::ApplicationNotFound { user_id })
}

/// Fetches a user by id, failing the test if missing.
pub async fn find_user(db: &DatabaseConnection, user_id: i64) -> Result<entities::user::Model> {
    entities::User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or(Error::ProfileNotFound { user_id })
}
