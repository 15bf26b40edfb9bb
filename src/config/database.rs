//! Database configuration module.
//!
//! Handles `SQLite` database connection and table creation using `SeaORM`.
//! The schema is generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the database always matches the
//! Rust struct definitions without manual SQL.

use crate::entities::{
    Country, Direction, Education, InternshipApplication, TraineeProfile, User, WorkExperience,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/internhub.sqlite".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL`
/// environment variable, falling back to a local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all tables using `SeaORM`'s schema generation from entity definitions.
///
/// Order matters only for readability; sqlite does not enforce the foreign
/// keys at creation time.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User);
    let country_table = schema.create_table_from_entity(Country);
    let direction_table = schema.create_table_from_entity(Direction);
    let profile_table = schema.create_table_from_entity(TraineeProfile);
    let education_table = schema.create_table_from_entity(Education);
    let work_experience_table = schema.create_table_from_entity(WorkExperience);
    let application_table = schema.create_table_from_entity(InternshipApplication);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&country_table)).await?;
    db.execute(builder.build(&direction_table)).await?;
    db.execute(builder.build(&profile_table)).await?;
    db.execute(builder.build(&education_table)).await?;
    db.execute(builder.build(&work_experience_table)).await?;
    db.execute(builder.build(&application_table)).await?;

    Ok(())
}
