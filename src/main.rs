use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

mod catalog;
mod config;
mod error;
mod matches;
mod models;
mod output;

use catalog::LeagueCatalog;
use config::{Command, Config};
use error::LeagueError;
use matches::{select_recent, FileMatchStore, MatchRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let catalog = match &config.catalog {
        Some(path) => LeagueCatalog::load(path, &config.data_dir)
            .with_context(|| format!("Loading league catalog {}", path.display()))?,
        None => LeagueCatalog::builtin(&config.data_dir)?,
    };
    if catalog.is_empty() {
        warn!("League catalog is empty");
    }
    info!(
        "{} leagues registered, archives under {}",
        catalog.len(),
        config.data_dir.display()
    );

    let repo = MatchRepository::new(Arc::new(catalog), Arc::new(FileMatchStore::new()));

    match config.command {
        Command::Leagues { json } => {
            if json {
                println!("{}", output::to_json(&repo.catalog().summaries())?);
            } else {
                println!("{}", output::league_table(repo.catalog().list()));
            }
        }
        Command::Recent {
            league,
            limit,
            no_stats,
            json,
        } => {
            let options = config::recent_options(limit, !no_stats)?;
            let recent = repo.recent_matches(&league, &options).await?;
            if json {
                println!("{}", output::to_json(&recent)?);
            } else {
                let descriptor = repo.league(&league)?;
                println!("{} ({} played)", descriptor.display_name, recent.len());
                for m in &recent {
                    println!("  {}", output::match_line(m));
                }
            }
        }
        Command::SelfTest { limit } => self_test(&repo, limit).await?,
    }

    Ok(())
}

/// Diagnostic run: dump the catalog, then show recent matches of the first
/// league whose archive can be read.
async fn self_test(repo: &MatchRepository, limit: usize) -> Result<()> {
    println!("{}", output::league_table(repo.catalog().list()));
    println!();

    let options = config::recent_options(limit, false)?;
    for league in repo.catalog().list() {
        match repo.league_matches(&league.key).await {
            Ok(all) => {
                let recent = select_recent(&all, &options);
                println!(
                    "{} - {} stored, last {} played:",
                    league.display_name,
                    all.len(),
                    recent.len()
                );
                for m in &recent {
                    println!("  {}", output::match_line(m));
                }
                return Ok(());
            }
            Err(e @ LeagueError::StorageNotFound { .. }) => {
                warn!("Skipping {}: {}", league.key, e);
            }
            Err(e) => warn!("{} failed: {}", league.key, e),
        }
    }

    anyhow::bail!("no readable league archive found in the catalog")
}
