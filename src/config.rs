use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::matches::{RecentMatchesOptions, DEFAULT_RECENT_LIMIT};

/// Football league archives: list leagues and recent played matches
#[derive(Parser, Debug, Clone)]
#[command(name = "league-matches", version, about)]
pub struct Config {
    /// Directory holding one `<league>.json` match archive per league
    #[arg(long, global = true, default_value = "data/football/leagues")]
    pub data_dir: PathBuf,

    /// League catalog file (JSON object keyed by league); the built-in
    /// registry is used when omitted
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List known leagues
    Leagues {
        /// Print as JSON (`[{name, id}]`)
        #[arg(long)]
        json: bool,
    },

    /// Most recent played matches of a league, newest first
    Recent {
        /// League key (e.g. England_Premier_League) or provider id (e.g. eng.1)
        league: String,

        /// Number of played matches to return
        #[arg(long, short = 'n', default_value_t = DEFAULT_RECENT_LIMIT.get())]
        limit: usize,

        /// Drop the per-match stats payload
        #[arg(long)]
        no_stats: bool,

        /// Print the raw match records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the catalog and a sample of recent matches
    SelfTest {
        /// Matches to show for the sampled league
        #[arg(long, short = 'n', default_value = "3")]
        limit: usize,
    },
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Recent { limit, .. } | Command::SelfTest { limit } if *limit == 0 => {
                anyhow::bail!("--limit must be at least 1");
            }
            _ => {}
        }
        if let Some(catalog) = &self.catalog {
            if !catalog.is_file() {
                anyhow::bail!("catalog file {} does not exist", catalog.display());
            }
        }
        Ok(())
    }
}

/// Build query options from the CLI flags.
pub fn recent_options(limit: usize, include_stats: bool) -> anyhow::Result<RecentMatchesOptions> {
    let limit =
        NonZeroUsize::new(limit).ok_or_else(|| anyhow::anyhow!("--limit must be at least 1"))?;
    let options = RecentMatchesOptions::default().with_limit(limit);
    Ok(if include_stats {
        options
    } else {
        options.without_stats()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_recent_defaults() {
        let config = parse(&["league-matches", "recent", "eng.1"]);
        assert_eq!(config.data_dir, PathBuf::from("data/football/leagues"));
        assert!(config.catalog.is_none());
        match config.command {
            Command::Recent {
                league,
                limit,
                no_stats,
                json,
            } => {
                assert_eq!(league, "eng.1");
                assert_eq!(limit, 15);
                assert!(!no_stats);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(parse(&["league-matches", "recent", "eng.1"]).validate().is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = parse(&["league-matches", "recent", "eng.1", "--limit", "0"]);
        assert!(config.validate().is_err());
        let config = parse(&["league-matches", "self-test", "-n", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_catalog_rejected() {
        let config = parse(&[
            "league-matches",
            "--catalog",
            "/definitely/not/here.json",
            "leagues",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let config = parse(&["league-matches", "leagues", "--data-dir", "/srv/leagues", "--json"]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/leagues"));
        assert!(matches!(config.command, Command::Leagues { json: true }));
    }

    #[test]
    fn test_recent_options() {
        let opts = recent_options(5, false).unwrap();
        assert_eq!(opts.limit.get(), 5);
        assert!(!opts.include_stats);
        assert!(recent_options(0, true).is_err());
    }
}
