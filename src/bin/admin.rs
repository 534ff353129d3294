//! CLI administration tool for url-alias.
//!
//! Operates directly on the SQLite storage, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a url (alias is generated when omitted)
//! cargo run --bin admin -- url save https://example.com --alias ex
//!
//! # Resolve an alias
//! cargo run --bin admin -- url get ex
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete ex
//!
//! # List stored aliases
//! cargo run --bin admin -- url list
//!
//! # Check the database
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (optional): SQLite database file (default: `./storage/storage.db`)

use url_alias::config::Config;
use url_alias::domain::StorageError;
use url_alias::domain::repositories::UrlRepository;
use url_alias::infrastructure::persistence::SqliteUrlRepository;
use url_alias::utils::random::{ALIAS_LENGTH, new_random_string};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (overrides STORAGE_PATH)
    #[arg(long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage stored urls
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Url management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a url under an alias
    Save {
        /// The url to store
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the url stored under an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List stored aliases
    List {
        /// Maximum number of rows to show
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = cli.storage.unwrap_or_else(Config::load_storage_path);

    let repo = SqliteUrlRepository::connect(&storage_path, 1)
        .await
        .with_context(|| format!("Failed to open storage at {storage_path}"))?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &storage_path).await?,
    }

    Ok(())
}

/// Dispatches url management commands.
async fn handle_url_action(action: UrlAction, repo: &SqliteUrlRepository) -> Result<()> {
    match action {
        UrlAction::Save { url, alias } => save_url(repo, url, alias).await,
        UrlAction::Get { alias } => get_url(repo, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(repo, &alias, yes).await,
        UrlAction::List { limit } => list_urls(repo, limit).await,
    }
}

async fn save_url(repo: &SqliteUrlRepository, url: String, alias: Option<String>) -> Result<()> {
    let alias = alias
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| new_random_string(ALIAS_LENGTH));

    match repo.save_url(&url, &alias).await {
        Ok(id) => {
            println!("{}", "✅ Url saved".green().bold());
            println!("  ID:    {}", id.to_string().bright_black());
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!("  Url:   {}", url.cyan());
            Ok(())
        }
        Err(StorageError::UrlExists) => {
            println!("{}", "⚠️  Alias or url already exists".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to save url: {}", e)),
    }
}

async fn get_url(repo: &SqliteUrlRepository, alias: &str) -> Result<()> {
    match repo.get_url_by_alias(alias).await {
        Ok(url) => {
            println!("{} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(StorageError::UrlNotFound) => {
            println!("{}", "  Not found".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Deletes an alias after confirmation (default: No).
async fn delete_url(repo: &SqliteUrlRepository, alias: &str, skip_confirm: bool) -> Result<()> {
    let url = match repo.get_url_by_alias(alias).await {
        Ok(url) => url,
        Err(StorageError::UrlNotFound) => {
            println!("{}", "  Not found".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Alias: {}", alias.bright_yellow());
    println!("  Url:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match repo.delete_url_by_alias(alias).await {
        Ok(rows) => {
            println!(
                "{} ({} row)",
                "✅ Alias deleted".green().bold(),
                rows.to_string().bright_white()
            );
            Ok(())
        }
        Err(StorageError::UrlNotFound) => {
            println!("{}", "⚠️  Alias was already deleted".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to delete alias: {}", e)),
    }
}

async fn list_urls(repo: &SqliteUrlRepository, limit: i64) -> Result<()> {
    let records = repo
        .list(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No urls stored".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<20} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "Url".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<6} {:<20} {}",
            record.id.to_string().bright_black(),
            record.alias.bright_yellow(),
            record.url.cyan()
        );
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteUrlRepository,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(repo.pool())
                .await
                .context("Database check failed")?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(repo.pool())
                .await?;
            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count urls: {}", e))?;

            println!("{}", "🗄️  Database info".bright_blue().bold());
            println!();
            println!("  File:    {}", storage_path.cyan());
            println!("  SQLite:  {}", version.bright_white());
            println!("  Aliases: {}", count.to_string().bright_white().bold());
        }
    }

    Ok(())
}
