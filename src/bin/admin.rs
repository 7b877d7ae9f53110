//! CLI administration tool for destinations-api.
//!
//! Read-only operator commands that reuse the service's repository without
//! going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List all destinations
//! cargo run --bin admin -- destination list
//!
//! # Show one destination
//! cargo run --bin admin -- destination show 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use destinations_api::application::services::DestinationService;
use destinations_api::config::Config;
use destinations_api::domain::entities::Destination;
use destinations_api::error::AppError;
use destinations_api::infrastructure::persistence::PgDestinationRepository;
use destinations_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting destinations-api data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect destinations
    Destination {
        #[command(subcommand)]
        action: DestinationAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Destination inspection subcommands.
#[derive(Subcommand)]
enum DestinationAction {
    /// List all destinations
    List,

    /// Show a single destination
    Show {
        /// Destination id
        id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Destination { action } => handle_destination_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches destination inspection commands.
async fn handle_destination_action(action: DestinationAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgDestinationRepository::new(Arc::new(pool.clone())));
    let service = DestinationService::new(repo);

    match action {
        DestinationAction::List => {
            let destinations = service.list_destinations().await?;

            if destinations.is_empty() {
                println!("{}", "No destinations found".yellow());
                return Ok(());
            }

            println!("{}", "Destinations".bright_blue().bold());
            println!();
            for d in destinations {
                println!(
                    "  {:>6}  {}",
                    d.id.to_string().bright_white(),
                    d.name.bright_green()
                );
            }
            println!();
        }
        DestinationAction::Show { id } => match service.get_destination(&id).await {
            Ok(destination) => print_destination(&destination),
            Err(AppError::NotFound { .. }) => {
                println!("{}", format!("Destination '{}' not found", id).red());
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}

fn print_destination(d: &Destination) {
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    println!("{}", d.name.bright_blue().bold());
    println!();
    println!("  Id:          {}", d.id);
    println!("  Description: {}", or_dash(d.description.clone()));
    if d.has_coordinates() {
        println!(
            "  Location:    {}, {}",
            d.lat.unwrap_or_default(),
            d.lng.unwrap_or_default()
        );
    } else {
        println!("  Location:    -");
    }
    println!("  Image:       {}", or_dash(d.image_url.clone()));
    println!("  Created:     {}", or_dash(d.created_at.map(|t| t.to_rfc3339())));
    println!("  Updated:     {}", or_dash(d.updated_at.map(|t| t.to_rfc3339())));
    println!();
}

/// Prints the number of stored destinations.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgDestinationRepository::new(Arc::new(pool.clone())));
    let count = DestinationService::new(repo).count_destinations().await?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  Destinations: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied = applied_migrations(pool)
                .await
                .context("Failed to read migration history")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

/// Counts successfully applied migrations.
async fn applied_migrations(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = TRUE")
        .fetch_one(pool)
        .await
}
