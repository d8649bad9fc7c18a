//! CLI administration tool for slug-shortener.
//!
//! Works directly on the storage file, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every short link
//! cargo run --bin admin -- list
//!
//! # Look up a slug, or the slug of a URL
//! cargo run --bin admin -- lookup abc12
//! cargo run --bin admin -- lookup --url https://example.com
//!
//! # Create a short link
//! cargo run --bin admin -- add https://example.com --slug promo
//!
//! # Check the storage file for malformed lines
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE_FILE`, `SLUG_LENGTH`, `SERVER_NAME`.
//!
//! `add` writes the storage file and refuses to run while a server holds it;
//! stop the server first, and the link is served once it starts again. The
//! read-only commands work at any time.

use slug_shortener::config::{Config, load_from_env};
use slug_shortener::domain::entities::{NewMapping, Submission};
use slug_shortener::domain::repositories::SlugRepository;
use slug_shortener::infrastructure::persistence::{FileSlugRepository, StorageLock, flat_file};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing slug-shortener storage.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all short links
    List,

    /// Look up a slug, or with --url the slug of a URL
    Lookup {
        /// Slug to resolve
        #[arg(required_unless_present = "url", conflicts_with = "url")]
        slug: Option<String>,

        /// Target URL to find the slug for
        #[arg(long)]
        url: Option<String>,
    },

    /// Create a short link
    Add {
        /// Target URL
        url: String,

        /// Desired slug (a random one is used if invalid or taken)
        #[arg(short, long)]
        slug: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Report malformed lines in the storage file
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::List => list_links(&config).await?,
        Commands::Lookup { slug, url } => lookup(&config, slug, url).await?,
        Commands::Add { url, slug, yes } => add_link(&config, url, slug, yes).await?,
        Commands::Check => check_file(&config).await?,
    }

    Ok(())
}

async fn open_repository(config: &Config) -> Result<FileSlugRepository> {
    FileSlugRepository::open(&config.storage_file, config.slug_length)
        .await
        .with_context(|| format!("Failed to read {}", config.storage_file.display()))
}

/// Lists every mapping sorted by slug.
///
/// # Output Format
///
/// ```text
/// Short links (/var/lib/shortener/urls)
///
///   Slug      URL
///   ────────────────────────────────────────
///   ab        https://example.com/a
///   abc12     https://example.com/b
///
///   Total: 2
/// ```
async fn list_links(config: &Config) -> Result<()> {
    let repo = open_repository(config).await?;
    let mappings = repo.snapshot().await;

    println!(
        "{} ({})",
        "Short links".bright_blue().bold(),
        config.storage_file.display()
    );
    println!();

    if mappings.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin add <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<10} {}",
        "Slug".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for mapping in mappings.sorted() {
        println!("  {:<10} {}", mapping.slug.cyan(), mapping.url);
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn lookup(config: &Config, slug: Option<String>, url: Option<String>) -> Result<()> {
    let repo = open_repository(config).await?;

    match (slug, url) {
        (Some(slug), _) => match repo.find_by_slug(&slug).await {
            Some(target) => println!("{} → {}", slug.cyan(), target),
            None => println!("{}", format!("Slug '{slug}' not found").yellow()),
        },
        (None, Some(url)) => match repo.find_by_url(&url).await {
            Some(slug) => println!(
                "{} ← {}",
                format!("{}/{}", config.public_base(), slug).cyan(),
                url
            ),
            None => println!("{}", format!("URL '{url}' has no short link").yellow()),
        },
        (None, None) => anyhow::bail!("Provide a slug or --url"),
    }

    Ok(())
}

/// Creates a mapping with the same rules as `POST /submit`.
async fn add_link(config: &Config, url: String, slug: Option<String>, yes: bool) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("URL must not be empty");
    }

    let _lock = StorageLock::acquire(&config.storage_file)
        .context("Stop the server before adding links")?;
    let repo = open_repository(config).await?;

    if let Some(existing) = repo.find_by_url(&url).await {
        println!(
            "{} {}/{}",
            "Already shortened:".yellow(),
            config.public_base(),
            existing
        );
        return Ok(());
    }

    println!("{}", "Create short link".bright_blue().bold());
    println!("  URL:  {}", url.cyan());
    if let Some(slug) = &slug {
        println!("  Slug: {}", slug.cyan());
    }
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let submission = repo
        .submit(NewMapping {
            url,
            requested_slug: slug.clone().filter(|s| !s.is_empty()),
        })
        .await
        .context("Failed to create link")?;

    let mapping = match submission {
        Submission::Created(mapping) | Submission::Existing(mapping) => mapping,
    };

    if slug.as_deref().is_some_and(|s| s != mapping.slug) {
        println!(
            "{}",
            "Requested slug was invalid or taken; generated a new one".yellow()
        );
    }

    println!(
        "{} {}",
        "Created:".green().bold(),
        mapping.short_url(config.public_base()).bright_yellow()
    );

    Ok(())
}

/// Parses the storage file and reports how many lines were usable.
async fn check_file(config: &Config) -> Result<()> {
    let report = flat_file::load_with_report(&config.storage_file)
        .await
        .with_context(|| format!("Failed to read {}", config.storage_file.display()))?;

    println!(
        "{} ({})",
        "Storage check".bright_blue().bold(),
        config.storage_file.display()
    );
    println!("  Lines:    {}", report.total_lines);
    println!("  Mappings: {}", report.mappings.len().to_string().green());

    if report.skipped_lines > 0 {
        println!(
            "  Skipped:  {}",
            report.skipped_lines.to_string().red().bold()
        );
    } else {
        println!("  Skipped:  {}", "0".green());
    }

    let superseded = report.total_lines - report.skipped_lines - report.mappings.len();
    if superseded > 0 {
        println!(
            "  {}",
            format!("{superseded} record(s) superseded by later duplicates").yellow()
        );
    }

    Ok(())
}
