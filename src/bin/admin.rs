//! CLI administration tool for quicklink.
//!
//! Creates and inspects short links, shows statistics and performs database
//! checks directly against PostgreSQL, without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- link shorten https://example.com
//!
//! # Look up a short ID
//! cargo run --bin admin -- link resolve Ab3_x-9QzT1k
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
//! The same variables as the server; see `quicklink::config`. A PostgreSQL
//! database is required.

use quicklink::application::services::LinkService;
use quicklink::config::{self, Config, mask_connection_string};
use quicklink::domain::repositories::LinkRepository;
use quicklink::infrastructure::persistence::PgLinkRepository;
use quicklink::utils::url_rules::{has_known_scheme, long_url_fits};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing quicklink.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Shorten {
        /// Long URL (prompted for if omitted)
        url: Option<String>,
    },

    /// Print the long URL behind a short ID
    Resolve {
        /// Short ID, without the base URL
        short_id: String,
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

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands through the same service the server uses.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::new(repo, config.base_url()?, config.insert_policy);

    match action {
        LinkAction::Shorten { url } => shorten_link(&service, url).await?,
        LinkAction::Resolve { short_id } => resolve_link(&service, &short_id).await?,
    }

    Ok(())
}

/// Creates a short link, prompting for the URL when it was not given.
///
/// The URL goes through the same protocol and length checks as the
/// `/query/shorten` endpoint.
async fn shorten_link(service: &LinkService<PgLinkRepository>, url: Option<String>) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Long URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    if !has_known_scheme(&long_url) {
        anyhow::bail!("{}", quicklink::AppError::Protocol);
    }
    if !long_url_fits(&long_url) {
        anyhow::bail!("{}", quicklink::AppError::TooLong);
    }

    let link = service
        .create_link(long_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("  Long URL:  {}", link.long_url.cyan());
    println!(
        "  Short URL: {}",
        service
            .base_url()
            .short_url(&link.short_id)
            .bright_yellow()
            .bold()
    );
    println!();
    println!("{}", "✅ Link ready".green().bold());

    Ok(())
}

/// Prints the destination of a short ID.
async fn resolve_link(service: &LinkService<PgLinkRepository>, short_id: &str) -> Result<()> {
    match service.resolve(short_id).await {
        Ok(long_url) => {
            println!("  {} → {}", short_id.cyan(), long_url.bright_white());
        }
        Err(e) => {
            println!("{}", format!("❌ {e}").red());
        }
    }

    Ok(())
}

/// Displays system statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let links_count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await
                .context("Failed to read server version")?;

            let applied: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .context("Failed to count applied migrations")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
