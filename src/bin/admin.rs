//! CLI administration tool for the URL shortener.
//!
//! Lets operators inspect rankings and manage individual URLs without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Ten most clicked URLs
//! cargo run --bin admin -- top
//!
//! # Ten most accessed URLs in a date range
//! cargo run --bin admin -- top-by-date --from 2025-09-10 --to 2025-09-18
//!
//! # Deactivate / activate a URL
//! cargo run --bin admin -- url deactivate 42
//! cargo run --bin admin -- url activate 42
//!
//! # Delete a URL and its access logs
//! cargo run --bin admin -- url delete 42 --yes
//!
//! # Totals and database checks
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `QR_CODE_DIR`: where QR images live (default: `wwwroot/qrcodes`)

use url_shortener_api::api::dto::pagination::parse_date_bound;
use url_shortener_api::config::{Config, mask_connection_string};
use url_shortener_api::domain::entities::short_url;
use url_shortener_api::infrastructure::persistence::{PgAnalyticsRepository, PgUrlRepository};
use url_shortener_api::infrastructure::qr_code::PngQrCodeGenerator;
use url_shortener_api::prelude::{AnalyticsService, DateRange, TopUrl, UrlService};
use url_shortener_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the URL shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Origin used when printing short URLs
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    origin: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Ten most clicked URLs
    Top,

    /// Ten most accessed URLs within a date range
    TopByDate {
        /// Inclusive lower bound (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Inclusive upper bound (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Manage a single URL
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Allow redirects again
    Activate { id: i64 },

    /// Refuse redirects for this URL
    Deactivate { id: i64 },

    /// Delete a URL together with its access logs
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Top => handle_top(&pool, &cli.origin, None).await?,
        Commands::TopByDate { from, to } => {
            let range = DateRange::new(parse_bound(from)?, parse_bound(to)?);
            handle_top(&pool, &cli.origin, Some(range)).await?
        }
        Commands::Url { action } => handle_url_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

fn parse_bound(value: Option<String>) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    value
        .map(|v| parse_date_bound(&v).map_err(anyhow::Error::msg))
        .transpose()
}

/// Prints a top-10 ranking, by clicks or by accesses in `range`.
async fn handle_top(pool: &PgPool, origin: &str, range: Option<DateRange>) -> Result<()> {
    let service = AnalyticsService::new(Arc::new(PgAnalyticsRepository::new(Arc::new(
        pool.clone(),
    ))));

    let top = match range {
        None => {
            println!("{}", "📈 Top URLs by clicks".bright_blue().bold());
            service.top_urls().await
        }
        Some(range) => {
            println!("{}", "📈 Top URLs by accesses".bright_blue().bold());
            service.top_urls_by_date(range).await
        }
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
    println!();

    print_ranking(&top, origin);

    Ok(())
}

fn print_ranking(top: &[TopUrl], origin: &str) {
    if top.is_empty() {
        println!("{}", "  No URLs found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<6} {:<8} {:<36} {}",
        "ID".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for entry in top {
        println!(
            "  {:<6} {:<8} {:<36} {}",
            entry.url_id.to_string().bright_black(),
            entry.clicks.to_string().bright_green(),
            short_url(origin, &entry.short_code).cyan(),
            entry.long_url
        );
    }
    println!();
}

/// Dispatches URL management commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = UrlService::new(
        Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))),
        Arc::new(PngQrCodeGenerator::new(&config.qr_code_dir)),
    );

    match action {
        UrlAction::Activate { id } | UrlAction::Deactivate { id } => {
            let is_active = matches!(action, UrlAction::Activate { .. });
            let url = service
                .set_active(id, is_active)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            let status = if url.is_active {
                "ACTIVE".green()
            } else {
                "INACTIVE".red()
            };
            println!(
                "{} {} is now {}",
                "✅".green(),
                url.short_code.cyan(),
                status
            );
        }
        UrlAction::Delete { id, yes } => {
            let url = service
                .get_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("  Short code: {}", url.short_code.cyan());
            println!("  Target:     {}", url.long_url);
            println!("  Clicks:     {}", url.clicks.to_string().bright_black());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this URL and its access logs?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            service
                .delete(id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

            println!("{}", "✅ URL deleted".green().bold());
        }
    }

    Ok(())
}

/// Displays totals: URLs, access logs, clicks.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let active_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE is_active")
        .fetch_one(pool)
        .await?;

    let logs_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_access_logs")
        .fetch_one(pool)
        .await?;

    println!(
        "  URLs:          {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Active URLs:   {}",
        active_count.to_string().bright_green().bold()
    );
    println!(
        "  Access logs:   {}",
        logs_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!(
                "  URL:        {}",
                mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
