//! CLI administration tool for radix-shortener.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Token arithmetic (no database needed)
//! cargo run --bin admin -- encode 46655
//! cargo run --bin admin -- decode ZZZ
//!
//! # Shorten a URL (prompts if the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Show where a token points
//! cargo run --bin admin -- lookup 1
//!
//! # View statistics and database status
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `BASE_URL`: prefix used when printing short URLs

use radix_shortener::application::services::UrlService;
use radix_shortener::config::Config;
use radix_shortener::infrastructure::persistence::PgUrlRepository;
use radix_shortener::utils::token;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing radix-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Encode a record id as a token
    Encode {
        /// Record id (positive integer)
        id: u64,
    },

    /// Decode a token into a record id
    Decode {
        /// Radix-36 token, case-insensitive
        token: String,
    },

    /// Shorten a URL, reusing the existing token if already stored
    Shorten {
        /// URL to shorten (prompted for if omitted)
        url: Option<String>,
    },

    /// Show the URL a token points to
    Lookup {
        /// Radix-36 token
        token: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

    match &cli.command {
        Commands::Encode { id } => return handle_encode(*id),
        Commands::Decode { token } => return handle_decode(token),
        _ => {}
    }

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Shorten { url } => handle_shorten(&pool, &config, url).await?,
        Commands::Lookup { token } => handle_lookup(&pool, &config, &token).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Encode { .. } | Commands::Decode { .. } => {}
    }

    Ok(())
}

fn handle_encode(id: u64) -> Result<()> {
    if id == 0 {
        anyhow::bail!("Record ids start at 1");
    }

    println!("{}", token::encode(id).bright_yellow().bold());
    Ok(())
}

fn handle_decode(input: &str) -> Result<()> {
    let id = token::decode(input).with_context(|| format!("Cannot decode '{}'", input))?;

    println!("{}", id.to_string().bright_yellow().bold());
    Ok(())
}

fn service(pool: &PgPool, config: &Config) -> UrlService {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    UrlService::new(repository, config.base_url.clone())
        .with_strict_validation(config.strict_url_validation)
}

/// Shortens a URL through the same service the HTTP API uses.
async fn handle_shorten(pool: &PgPool, config: &Config, url: Option<String>) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("URL").interact_text()?,
    };

    let shortened = service(pool, config)
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("  URL:       {}", shortened.record.url.cyan());
    println!("  ID:        {}", shortened.record.id.to_string().bright_black());
    println!("  Token:     {}", shortened.token.bright_yellow().bold());
    println!("  Short URL: {}", shortened.short_url.bright_green().bold());
    println!();

    Ok(())
}

/// Prints the stored URL for a token.
async fn handle_lookup(pool: &PgPool, config: &Config, input: &str) -> Result<()> {
    let record = service(pool, config)
        .resolve(input)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match record {
        Some(record) => {
            println!("  Token: {}", input.to_lowercase().bright_yellow());
            println!("  ID:    {}", record.id.to_string().bright_black());
            println!("  URL:   {}", record.url.cyan());
        }
        None => println!("{}", format!("⚠️  No link for '{}'", input).yellow()),
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows the number of stored links and the most recent token issued.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let last_id: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:      {}",
        links_count.to_string().bright_green().bold()
    );

    if let Some(id) = last_id {
        println!(
            "  Last token: {}",
            token::encode(id.unsigned_abs()).bright_green().bold()
        );
    }
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
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
