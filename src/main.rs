//! Admin CLI for the internship selection core.
//!
//! Exposes the privileged operations (rating, ending a selection round,
//! recommendation recomputation, statistics) for operators; the regular
//! request path goes through the web layer, not this binary.

use clap::{Parser, Subcommand};
use internhub::{
    config::{self, database},
    core::{rating, recommendation, selection, statistics},
    errors::Result,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "internhub", about = "Internship selection administration")]
struct Cli {
    /// Path to the selection-rules config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the database schema
    Init,
    /// Print the current rating of qualified candidates
    Rating,
    /// Close the selection round: promote top-quota candidates, reject the rest
    EndSelection,
    /// Recompute the recommendation flag for one application
    Recommend {
        /// Applicant user id
        user_id: i64,
    },
    /// Print the aggregate dashboard statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Env vars can also be set externally; a missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let selection_config = config::selection::load_config(&cli.config)
        .inspect_err(|e| error!("Failed to load selection configuration: {e}"))?;

    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established"))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    match cli.command {
        Command::Init => {
            database::create_tables(&db).await?;
            info!("Database schema created");
        }
        Command::Rating => {
            let rated = rating::rank_qualified(&db).await?;
            println!("{}", serde_json::to_string_pretty(&rated)?);
        }
        Command::EndSelection => {
            let outcome = selection::finalize_selection(&db, &selection_config).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Recommend { user_id } => {
            let recommended =
                recommendation::evaluate_recommendation(&db, &selection_config, user_id).await?;
            println!("{{\"user_id\": {user_id}, \"is_recommended\": {recommended}}}");
        }
        Command::Stats => {
            let stats = statistics::collect_statistics(&db).await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
