//! Unified error types and result handling.

use thiserror::Error;

/// Top-level error type for the internship selection core.
#[derive(Debug, Error)]
pub enum Error {
    /// Selection rules or runtime configuration are missing/invalid.
    /// Surfaced as a server misconfiguration, never as a per-request error.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what is misconfigured
        message: String,
    },

    /// Referenced trainee profile does not exist
    #[error("Trainee profile not found for user {user_id}")]
    ProfileNotFound {
        /// User id the profile was looked up by
        user_id: i64,
    },

    /// Referenced internship application does not exist
    #[error("Internship application not found for user {user_id}")]
    ApplicationNotFound {
        /// Applicant user id the application was looked up by
        user_id: i64,
    },

    /// A score outside the accepted 0..=100 range was submitted
    #[error("Score {value} is out of range, expected 0..=100")]
    InvalidScore {
        /// The rejected value
        value: i32,
    },

    /// An education record ends before it starts
    #[error("Education end year {end_year} precedes start year {start_year}")]
    InvalidEducationYears {
        /// Submitted start year
        start_year: i32,
        /// Submitted end year
        end_year: i32,
    },

    /// Database error from the persistence layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config file access and similar)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error in the CLI output path
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
