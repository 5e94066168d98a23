//! League catalog: the fixed set of known leagues and where their match
//! archives live.
//!
//! The catalog is built once at startup, either from the built-in registry or
//! from a single JSON catalog file, and is immutable afterwards.  A catalog
//! file maps each league key to either a bare file name or a descriptor:
//!
//! ```json
//! {
//!   "England_Premier_League": "England_Premier_League.json",
//!   "eng.1": { "id": "eng.1" },
//!   "Spain_Laliga": { "id": "esp.1", "name": "LaLiga", "file": "Spain_Laliga.json" }
//! }
//! ```

pub mod builtin;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::LeagueError;
use crate::models::{LeagueDescriptor, LeagueSummary};

pub use builtin::BUILTIN_LEAGUES;

/// One value of the catalog file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogEntry {
    /// Bare archive file name
    File(String),
    Descriptor {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        file: Option<String>,
    },
}

/// Top-level catalog object as (key, value) pairs in file order.
///
/// Unlike `serde_json::Map`, repeated keys are not collapsed.
struct RawCatalog(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by league")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawCatalog, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Debug, Clone)]
pub struct LeagueCatalog {
    /// Declared order, used for display only
    leagues: Vec<LeagueDescriptor>,
    by_key: HashMap<String, usize>,
    /// external id → index of the first league declaring it
    by_external_id: HashMap<String, usize>,
}

impl LeagueCatalog {
    pub fn from_descriptors(leagues: Vec<LeagueDescriptor>) -> Result<Self, LeagueError> {
        let mut seen = HashSet::with_capacity(leagues.len());
        let duplicate = leagues
            .iter()
            .find(|l| !seen.insert(l.key.clone()))
            .map(|l| l.key.clone());
        if let Some(key) = duplicate {
            return Err(LeagueError::DuplicateLeague { key });
        }
        Ok(Self::index(leagues))
    }

    /// The built-in registry, with archives stored under `data_dir`.
    pub fn builtin(data_dir: &Path) -> Result<Self, LeagueError> {
        let leagues = BUILTIN_LEAGUES
            .iter()
            .map(|(key, name, id)| LeagueDescriptor {
                key: key.to_string(),
                display_name: name.to_string(),
                external_id: Some(id.to_string()),
                storage_path: data_dir.join(format!("{key}.json")),
            })
            .collect();
        Self::from_descriptors(leagues)
    }

    /// Keys must already be unique.
    fn index(leagues: Vec<LeagueDescriptor>) -> Self {
        let mut by_key = HashMap::with_capacity(leagues.len());
        let mut by_external_id = HashMap::new();
        for (idx, league) in leagues.iter().enumerate() {
            by_key.insert(league.key.clone(), idx);
            if let Some(id) = &league.external_id {
                by_external_id.entry(id.clone()).or_insert(idx);
            }
        }
        LeagueCatalog {
            leagues,
            by_key,
            by_external_id,
        }
    }

    /// Load the catalog file at `path`.  Relative archive names resolve
    /// against `data_dir`.
    pub fn load(path: &Path, data_dir: &Path) -> Result<Self, LeagueError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LeagueError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let leagues = Self::parse(&raw, data_dir).map_err(|reason| LeagueError::CatalogParse {
            path: path.to_path_buf(),
            reason,
        })?;
        let catalog = Self::from_descriptors(leagues)?;
        debug!("Loaded {} leagues from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Descriptors in file order.  Repeated keys are kept so the caller can
    /// reject them.
    fn parse(raw: &str, data_dir: &Path) -> Result<Vec<LeagueDescriptor>, String> {
        let RawCatalog(entries) =
            serde_json::from_str(raw).map_err(|e| format!("expected a JSON object: {e}"))?;

        let mut leagues = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let entry: CatalogEntry = serde_json::from_value(value).map_err(|_| {
                format!("entry '{key}' must be a file name or an object with id/name/file")
            })?;
            let (external_id, name, file) = match entry {
                CatalogEntry::File(file) => (None, None, Some(file)),
                CatalogEntry::Descriptor { id, name, file } => (id, name, file),
            };
            let file = file.unwrap_or_else(|| format!("{key}.json"));
            leagues.push(LeagueDescriptor {
                display_name: name.unwrap_or_else(|| key.clone()),
                external_id,
                storage_path: data_dir.join(file),
                key,
            });
        }

        Ok(leagues)
    }

    /// All registered leagues in declared order.
    pub fn list(&self) -> &[LeagueDescriptor] {
        &self.leagues
    }

    /// `[{name, id}]` view of the catalog.
    pub fn summaries(&self) -> Vec<LeagueSummary> {
        self.leagues.iter().map(LeagueDescriptor::summary).collect()
    }

    /// Resolve a league by its key.
    pub fn resolve(&self, key: &str) -> Result<&LeagueDescriptor, LeagueError> {
        self.by_key
            .get(key)
            .map(|&idx| &self.leagues[idx])
            .ok_or_else(|| LeagueError::unknown(key))
    }

    /// Resolve a league by key, falling back to its external id.
    pub fn lookup(&self, league: &str) -> Result<&LeagueDescriptor, LeagueError> {
        self.resolve(league).or_else(|_| {
            self.by_external_id
                .get(league)
                .map(|&idx| &self.leagues[idx])
                .ok_or_else(|| LeagueError::unknown(league))
        })
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(raw: &str) -> LeagueCatalog {
        LeagueCatalog::from_descriptors(LeagueCatalog::parse(raw, Path::new("data")).unwrap())
            .unwrap()
    }

    #[test]
    fn test_single_descriptor_listing() {
        let catalog = parse(r#"{"eng.1": {"id": "eng.1"}}"#);
        assert_eq!(
            catalog.summaries(),
            vec![LeagueSummary {
                name: "eng.1".into(),
                id: "eng.1".into()
            }]
        );
        assert_eq!(
            catalog.resolve("eng.1").unwrap().storage_path,
            PathBuf::from("data/eng.1.json")
        );
    }

    #[test]
    fn test_file_name_entries() {
        let catalog = parse(
            r#"{
                "England_Premier_League": "England_Premier_League.json",
                "Germany_Bundesliga": {"id": "ger.1", "name": "Bundesliga", "file": "bundesliga.json"}
            }"#,
        );
        let epl = catalog.resolve("England_Premier_League").unwrap();
        assert_eq!(epl.display_name, "England_Premier_League");
        assert_eq!(epl.external_id, None);
        assert_eq!(epl.storage_path, PathBuf::from("data/England_Premier_League.json"));

        let bl = catalog.resolve("Germany_Bundesliga").unwrap();
        assert_eq!(bl.display_name, "Bundesliga");
        assert_eq!(bl.storage_path, PathBuf::from("data/bundesliga.json"));
    }

    #[test]
    fn test_declared_order_is_kept() {
        let catalog = parse(r#"{"zzz": "z.json", "aaa": "a.json", "mmm": "m.json"}"#);
        let keys: Vec<_> = catalog.list().iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["zzz", "aaa", "mmm"]);
    }

    #[test]
    fn test_resolve_roundtrips_every_key() {
        let catalog = LeagueCatalog::builtin(Path::new("data/football/leagues")).unwrap();
        assert_eq!(catalog.len(), BUILTIN_LEAGUES.len());
        for league in catalog.list() {
            assert_eq!(catalog.resolve(&league.key).unwrap().key, league.key);
        }
    }

    #[test]
    fn test_resolve_unknown_key() {
        let catalog = LeagueCatalog::builtin(Path::new("data")).unwrap();
        let err = catalog.resolve("Narnia_Premier_League").unwrap_err();
        assert!(matches!(err, LeagueError::UnknownLeague { ref league } if league == "Narnia_Premier_League"));
        // resolve is key-only
        assert!(catalog.resolve("eng.1").is_err());
    }

    #[test]
    fn test_lookup_by_external_id() {
        let catalog = LeagueCatalog::builtin(Path::new("data")).unwrap();
        assert_eq!(catalog.lookup("eng.1").unwrap().key, "England_Premier_League");
        assert_eq!(catalog.lookup("Spain_Laliga").unwrap().key, "Spain_Laliga");
        assert!(matches!(
            catalog.lookup("xxx.9"),
            Err(LeagueError::UnknownLeague { .. })
        ));
    }

    #[test]
    fn test_key_wins_over_external_id() {
        let catalog = parse(r#"{"a": {"id": "b"}, "b": {"id": "c"}}"#);
        assert_eq!(catalog.lookup("b").unwrap().key, "b");
        assert_eq!(catalog.lookup("c").unwrap().key, "b");
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let d = LeagueDescriptor {
            key: "eng.1".into(),
            display_name: "Premier League".into(),
            external_id: None,
            storage_path: PathBuf::from("x.json"),
        };
        let err = LeagueCatalog::from_descriptors(vec![d.clone(), d]).unwrap_err();
        assert!(matches!(err, LeagueError::DuplicateLeague { .. }));
    }

    #[test]
    fn test_bad_catalog_shapes() {
        assert!(LeagueCatalog::parse("[]", Path::new("data")).is_err());
        assert!(LeagueCatalog::parse("not json", Path::new("data")).is_err());
        assert!(LeagueCatalog::parse(r#"{"eng.1": 42}"#, Path::new("data")).is_err());
    }

    #[test]
    fn test_load_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LeagueCatalog::load(&dir.path().join("leagues.json"), dir.path()).unwrap_err();
        assert!(matches!(err, LeagueError::CatalogRead { .. }));
    }

    #[test]
    fn test_repeated_key_in_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leagues.json");
        std::fs::write(
            &path,
            r#"{"Germany_Bundesliga": "bundesliga.json", "eng.1": {}, "Germany_Bundesliga": "Germany_Bundesliga.json"}"#,
        )
        .unwrap();
        let err = LeagueCatalog::load(&path, dir.path()).unwrap_err();
        assert!(matches!(err, LeagueError::DuplicateLeague { ref key } if key == "Germany_Bundesliga"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leagues.json");
        std::fs::write(&path, r#"{"eng.1": {"id": "eng.1"}}"#).unwrap();
        let catalog = LeagueCatalog::load(&path, dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.resolve("eng.1").unwrap().storage_path,
            dir.path().join("eng.1.json")
        );
    }
}
