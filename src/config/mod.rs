/// Database configuration and connection management
pub mod database;

/// Selection-rule configuration loading from config.toml
pub mod selection;

pub use selection::SelectionConfig;
