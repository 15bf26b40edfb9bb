//! Aggregate statistics for the program dashboard.
//!
//! Plain counts over applications, education history, directions, ages and
//! work experience. Everything aggregates in memory after narrow queries;
//! the structs are serialization-ready for whatever web layer sits on top.

use crate::{
    entities::{
        Education, InternshipApplication, TraineeProfile, WorkExperience, direction,
        education::EducationType, internship_application,
    },
    errors::Result,
};
use chrono::{Datelike, Utc};
use sea_orm::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Application totals split by the recommendation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseStatistics {
    /// All applications
    pub total: u64,
    /// Applications with a positive recommendation
    pub relevant: u64,
    /// Everything else, including never-computed flags
    pub irrelevant: u64,
}

/// One labelled bucket of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountLabel {
    /// Bucket label (education type, direction name, age, years)
    pub label: String,
    /// Number of items in the bucket
    pub count: u64,
}

/// Full dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    /// Application totals
    pub responses: ResponseStatistics,
    /// Education records bucketed by institution type
    pub education_by_type: Vec<CountLabel>,
    /// Applications bucketed by direction name (no-direction rows excluded)
    pub directions: Vec<CountLabel>,
    /// Profiles bucketed by age in years (profiles without birth date excluded)
    pub ages: Vec<CountLabel>,
    /// Profiles bucketed by total years of work experience
    pub work_experience_years: Vec<CountLabel>,
}

/// Collects the full statistics payload.
pub async fn collect_statistics(db: &DatabaseConnection) -> Result<Statistics> {
    let total = InternshipApplication::find().count(db).await?;
    let relevant = InternshipApplication::find()
        .filter(internship_application::Column::IsRecommended.eq(true))
        .count(db)
        .await?;
    let responses = ResponseStatistics {
        total,
        relevant,
        irrelevant: total - relevant,
    };

    let mut education_by_type: BTreeMap<String, u64> = BTreeMap::new();
    for education in Education::find().all(db).await? {
        *education_by_type
            .entry(kind_label(education.kind).to_string())
            .or_default() += 1;
    }

    let mut directions: BTreeMap<String, u64> = BTreeMap::new();
    let applications = InternshipApplication::find()
        .find_also_related(direction::Entity)
        .all(db)
        .await?;
    for (_, direction) in applications {
        if let Some(direction) = direction {
            *directions.entry(direction.name).or_default() += 1;
        }
    }

    let today = Utc::now().date_naive();
    let mut ages: BTreeMap<String, u64> = BTreeMap::new();
    let profiles = TraineeProfile::find().all(db).await?;
    for profile in &profiles {
        if let Some(birth_date) = profile.birth_date {
            let age = today.year() - birth_date.year();
            *ages.entry(age.to_string()).or_default() += 1;
        }
    }

    // Total experience per profile, whole years; still-running jobs count
    // up to today.
    let mut days_per_profile: BTreeMap<i64, i64> = BTreeMap::new();
    for experience in WorkExperience::find().all(db).await? {
        let end = experience.end_date.unwrap_or(today);
        let days = (end - experience.start_date).num_days().max(0);
        *days_per_profile.entry(experience.profile_id).or_default() += days;
    }
    let mut work_experience_years: BTreeMap<String, u64> = BTreeMap::new();
    for days in days_per_profile.values() {
        let years = days / 365;
        *work_experience_years.entry(years.to_string()).or_default() += 1;
    }

    Ok(Statistics {
        responses,
        education_by_type: into_count_labels(education_by_type),
        directions: into_count_labels(directions),
        ages: into_count_labels(ages),
        work_experience_years: into_count_labels(work_experience_years),
    })
}

const fn kind_label(kind: EducationType) -> &'static str {
    match kind {
        EducationType::School => "school",
        EducationType::University => "university",
        EducationType::College => "college",
    }
}

fn into_count_labels(buckets: BTreeMap<String, u64>) -> Vec<CountLabel> {
    buckets
        .into_iter()
        .map(|(label, count)| CountLabel { label, count })
        .collect()
}
