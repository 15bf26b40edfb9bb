//! Education eligibility rule.
//!
//! The recommendation rule only cares about one thing in the education
//! history: a university bachelor's degree that was started long enough ago.
//! The check is a pure predicate over already-loaded rows so it can be tested
//! without a database and reused by any caller that has the rows at hand.

use crate::entities::education::{self, Degree, EducationType};

/// Returns true if at least one education record satisfies the
/// "university bachelor's started `required_years` or more before its end"
/// rule.
///
/// An education without an end year counts as ongoing and is measured
/// against `current_year` instead; still being enrolled counts toward
/// tenure. Multiple qualifying records do not stack, this is an existence
/// check only.
#[must_use]
pub fn is_eligible_education(
    educations: &[education::Model],
    current_year: i32,
    required_years: i32,
) -> bool {
    educations.iter().any(|education| {
        education.kind == EducationType::University
            && education.degree == Some(Degree::Bachelor)
            && education.start_year <= education.end_year.unwrap_or(current_year) - required_years
    })
}
