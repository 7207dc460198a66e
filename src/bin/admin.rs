//! CLI administration tool for link-shortener.
//!
//! Works directly on the SQLite database, so the HTTP server does not need to
//! be running.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show Ab3_x9Qz
//!
//! # Delete a link without prompting
//! cargo run --bin admin -- links delete Ab3_x9Qz -y
//!
//! # Dump the database as JSON
//! cargo run --bin admin -- dump
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`link_shortener::config`].

use link_shortener::application::services::LinkService;
use link_shortener::config::Config;
use link_shortener::domain::entities::Link;
use link_shortener::infrastructure::persistence::{SqliteLinkRepository, connect, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing link-shortener.
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
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Print every stored link as JSON
    Dump,

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show a single link
    Show {
        /// Short code
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let pool = connect(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_connect_timeout),
    )
    .await
    .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service(&pool).await?).await?,
        Commands::Dump => dump(&service(&pool).await?).await?,
        Commands::Stats => handle_stats(&service(&pool).await?).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Brings the schema up to date and wires the link service on top of `pool`.
async fn service(pool: &SqlitePool) -> Result<Service> {
    run_migrations(pool)
        .await
        .context("Failed to run migrations")?;

    let repository = SqliteLinkRepository::new(Arc::new(pool.clone()));
    Ok(LinkService::new(Arc::new(repository)))
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Show { code } => show_link(service, &code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// Links
///
///   Code      Clicks  Created           URL
///   ──────────────────────────────────────────────────────────────
///   Ab3_x9Qz  3       2025-01-15 10:30  https://openai.com
/// ```
async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8}  {:<6}  {:<16}  {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<8}  {:<6}  {:<16}  {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn find_link(service: &Service, code: &str) -> Result<Link> {
    service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))
}

fn print_link(link: &Link) {
    println!("  Code:    {}", link.short_code.cyan());
    println!("  URL:     {}", link.original_url.bright_white());
    println!("  Clicks:  {}", link.clicks.to_string().bright_green().bold());
    println!("  ID:      {}", link.id.to_string().bright_black());
    println!("  Created: {}", link.created_at.to_rfc3339().bright_black());
    println!("  Updated: {}", link.updated_at.to_rfc3339().bright_black());
}

async fn show_link(service: &Service, code: &str) -> Result<()> {
    let link = find_link(service, code).await?;

    println!("{}", "Link".bright_blue().bold());
    println!();
    print_link(&link);
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No) unless `--yes` is given.
async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    let link = find_link(service, code).await?;

    println!("{}", "Delete Link".bright_blue().bold());
    println!();
    print_link(&link);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(&link)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "Link deleted".green().bold());

    Ok(())
}

/// Prints the same document as `GET /api/urls/db/contents`.
async fn dump(service: &Service) -> Result<()> {
    let dump = service
        .dump_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to dump database: {}", e))?;

    println!("{}", serde_json::to_string_pretty(&dump)?);

    Ok(())
}

/// Displays totals for links and clicks.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let clicks_count: i64 = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?
        .iter()
        .map(|link| link.clicks)
        .sum();

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            run_migrations(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
