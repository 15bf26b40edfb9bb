//! Selection-rule configuration loading from config.toml.
//!
//! The three knobs of the selection process (preferred citizenship, required
//! university tenure, seats per round) live in a `[selection]` table in
//! config.toml. The struct is injected explicitly into the evaluator and
//! finalizer so tests can vary the rules per case; nothing reads it
//! ambiently.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
struct ConfigFile {
    /// Selection-rule settings
    selection: SelectionConfig,
}

/// Rules driving recommendation and selection
#[derive(Debug, Deserialize, Clone)]
pub struct SelectionConfig {
    /// Country id whose citizens can be recommended
    pub preferred_citizenship_id: i64,
    /// Minimum years elapsed since a qualifying university education began
    pub required_university_years: i32,
    /// Number of applicants promoted per selection round
    pub selection_quota: usize,
}

impl SelectionConfig {
    /// Checks the loaded values for sanity. A negative tenure requirement or
    /// a non-positive citizenship id can only come from a broken deployment,
    /// so evaluation must not proceed.
    pub fn validate(&self) -> Result<()> {
        if self.required_university_years < 0 {
            return Err(Error::Config {
                message: format!(
                    "required_university_years must be non-negative, got {}",
                    self.required_university_years
                ),
            });
        }
        if self.preferred_citizenship_id <= 0 {
            return Err(Error::Config {
                message: format!(
                    "preferred_citizenship_id must be a valid country id, got {}",
                    self.preferred_citizenship_id
                ),
            });
        }
        Ok(())
    }
}

/// Loads selection configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing or fail validation
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SelectionConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    config.selection.validate()?;
    Ok(config.selection)
}

/// Loads selection configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<SelectionConfig> {
    load_config("config.toml")
}
