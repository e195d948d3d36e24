//! CLI administration tool for snipurl.
//!
//! Initializes the database and inspects stored links without going through
//! the HTTP surface.
//!
//! # Usage
//!
//! ```bash
//! # Create the database file and schema (run once before first use)
//! cargo run --bin admin -- db init
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Show a single link
//! cargo run --bin admin -- link aZ3k9Q
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` / `DB_PATH`: SQLite database (default: `sqlite://urls.db`)

use snipurl::AppError;
use snipurl::application::services::LinkService;
use snipurl::config;
use snipurl::infrastructure::persistence::{SqliteLinkRepository, database};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing snipurl.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show link and hit totals
    Stats,

    /// Show a single short link
    Link {
        /// Short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the database if missing and apply the schema
    Init,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;

    let pool = database::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let outcome = match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &config.database_url).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Link { code } => handle_link(&pool, &code, &config.base_url).await,
    };

    pool.close().await;
    outcome
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Init => {
            database::run_migrations(pool).await?;
            println!("{} Database initialized", "✓".green().bold());
            println!("  {}", database_url.dimmed());
        }
        DbAction::Check => match database::ping(pool).await {
            Ok(()) => println!("{} Database connection OK", "✓".green().bold()),
            Err(e) => {
                println!("{} Database connection failed: {}", "✗".red().bold(), e);
                anyhow::bail!("database check failed");
            }
        },
    }

    Ok(())
}

/// Prints aggregate counters.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    let service = link_service(pool, "");
    let totals = service.totals().await.context("Failed to read statistics")?;

    println!("{}", "Statistics".bold().underline());
    println!("  Links: {}", totals.links.to_string().cyan());
    println!("  Hits:  {}", totals.hits.to_string().cyan());

    Ok(())
}

/// Prints one link, or reports that the code is unknown.
async fn handle_link(pool: &SqlitePool, code: &str, base_url: &str) -> Result<()> {
    let service = link_service(pool, base_url);

    match service.get_link_by_code(code).await {
        Ok(link) => {
            println!("{}", service.short_url(&link.code).bold());
            println!("  URL:     {}", link.original_url);
            println!("  Hits:    {}", link.hit_count.to_string().cyan());
            println!("  Created: {}", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} No link with code '{}'", "✗".yellow().bold(), code);
        }
        Err(e) => return Err(e).context("Failed to look up link"),
    }

    Ok(())
}

/// Builds a link service over the given pool.
fn link_service(pool: &SqlitePool, base_url: &str) -> LinkService<SqliteLinkRepository> {
    LinkService::new(
        Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))),
        base_url,
    )
}
