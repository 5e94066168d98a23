use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// A registered league and where its match archive lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueDescriptor {
    /// Stable symbolic key, unique within the catalog (e.g. "England_Premier_League")
    pub key: String,
    pub display_name: String,
    /// Provider id (ESPN league slug, e.g. "eng.1")
    pub external_id: Option<String>,
    /// JSON file holding the league's matches, oldest first
    pub storage_path: PathBuf,
}

impl LeagueDescriptor {
    pub fn summary(&self) -> LeagueSummary {
        LeagueSummary {
            name: self.display_name.clone(),
            id: self
                .external_id
                .clone()
                .unwrap_or_else(|| self.key.clone()),
        }
    }
}

/// Public shape of a league as returned by the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub name: String,
    pub id: String,
}

/// One match as stored in a league archive.
///
/// Only `score` and `stats` are interpreted. The record keeps the stored
/// object as-is, so every field (including a `null` one) is written back
/// exactly as it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for MatchRecord {
    type Error = String;

    /// `score`, when present and non-null, must be a string.
    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("score") {
            None | Some(Value::Null) | Some(Value::String(_)) => Ok(MatchRecord { fields }),
            Some(other) => Err(format!("`score` must be a string, found {other}")),
        }
    }
}

impl Serialize for MatchRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MatchRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::deserialize(deserializer)?;
        MatchRecord::try_from(fields).map_err(de::Error::custom)
    }
}

impl MatchRecord {
    /// Final score ("2-1"), or a placeholder ("-", "Arsenal vs Chelsea") for
    /// fixtures that have not been played
    pub fn score(&self) -> Option<&str> {
        self.text("score")
    }

    /// The raw `stats` payload; `Some(Value::Null)` when stored as `null`.
    pub fn stats(&self) -> Option<&Value> {
        self.fields.get("stats")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A match counts as played when it has a score that is neither the
    /// "-" placeholder nor a "<team> vs <team>" fixture label.
    pub fn is_played(&self) -> bool {
        match self.score() {
            Some(score) => {
                !score.is_empty() && score != "-" && !score.to_lowercase().contains("vs")
            }
            None => false,
        }
    }

    pub fn without_stats(&self) -> MatchRecord {
        let mut fields = self.fields.clone();
        fields.remove("stats");
        MatchRecord { fields }
    }

    pub fn has_stats(&self) -> bool {
        match self.stats() {
            Some(Value::Object(m)) => !m.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        }
    }

    /// Provider game id; football archives use `gameId`, hockey ones `game_id`.
    pub fn game_id(&self) -> Option<&str> {
        self.text("gameId").or_else(|| self.text("game_id"))
    }

    pub fn home_team(&self) -> Option<&str> {
        self.text("team1").or_else(|| self.team_name("home_team"))
    }

    pub fn away_team(&self) -> Option<&str> {
        self.text("team2").or_else(|| self.team_name("away_team"))
    }

    /// "Arsenal VS Chelsea" style heading written alongside the teams.
    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn date_label(&self) -> Option<&str> {
        self.text("date")
    }

    /// Parse the `date` field.  Accepts ISO dates ("2025-01-04") and the
    /// schedule-page headings ("Saturday, January 4, 2025").
    pub fn kickoff_date(&self) -> Option<NaiveDate> {
        let raw = self.date_label()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%A, %B %d, %Y"))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%B %d, %Y"))
            .ok()
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    fn team_name(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|t| t.get("name"))
            .and_then(Value::as_str)
    }
}
