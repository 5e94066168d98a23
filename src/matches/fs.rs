use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::store::MatchStore;
use crate::error::LeagueError;
use crate::models::{LeagueDescriptor, MatchRecord};

/// Match store reading one JSON array per league from disk.
///
/// The file is re-read on every call; nothing is cached.
#[derive(Debug, Default, Clone)]
pub struct FileMatchStore;

impl FileMatchStore {
    pub fn new() -> Self {
        FileMatchStore
    }
}

#[async_trait]
impl MatchStore for FileMatchStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self, league: &LeagueDescriptor) -> Result<Vec<MatchRecord>, LeagueError> {
        let path = &league.storage_path;
        debug!("Reading matches for {} from {}", league.key, path.display());

        let raw = tokio::fs::read(path)
            .await
            .map_err(|source| LeagueError::StorageNotFound {
                league: league.key.clone(),
                path: path.clone(),
                source,
            })?;

        parse_match_archive(&raw).map_err(|reason| LeagueError::MalformedData {
            league: league.key.clone(),
            path: path.clone(),
            reason,
        })
    }
}

/// Parse a league archive.  The document must be UTF-8 JSON: an array whose
/// elements are objects with an optional string `score`.
pub fn parse_match_archive(raw: &[u8]) -> Result<Vec<MatchRecord>, String> {
    let doc: Value = serde_json::from_slice(raw).map_err(|e| format!("invalid JSON: {e}"))?;
    let items = match doc {
        Value::Array(items) => items,
        other => return Err(format!("expected an array of matches, found {}", kind(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            if !item.is_object() {
                return Err(format!("match #{idx} is {}, expected an object", kind(&item)));
            }
            serde_json::from_value(item).map_err(|e| format!("match #{idx}: {e}"))
        })
        .collect()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
