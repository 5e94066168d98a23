use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the league catalog and the match repository.
///
/// Every variant is terminal for the call that produced it: no partial
/// results are returned alongside an error.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// The key or external id is not registered in the catalog.
    #[error("unknown league '{league}'")]
    UnknownLeague { league: String },

    /// The league is registered but its match file is missing or unreadable.
    #[error("match file for league '{league}' not found at {}: {source}", path.display())]
    StorageNotFound {
        league: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The match file exists but is not a sequence of match records.
    #[error("malformed match data for league '{league}' in {}: {reason}", path.display())]
    MalformedData {
        league: String,
        path: PathBuf,
        reason: String,
    },

    /// The catalog file could not be read.
    #[error("failed to read league catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid league mapping.
    #[error("failed to parse league catalog {}: {reason}", path.display())]
    CatalogParse { path: PathBuf, reason: String },

    #[error("league '{key}' is registered more than once")]
    DuplicateLeague { key: String },
}

impl LeagueError {
    pub fn unknown(league: &str) -> Self {
        LeagueError::UnknownLeague {
            league: league.to_string(),
        }
    }
}
