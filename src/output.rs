//! Terminal rendering for the CLI.

use anyhow::Result;
use serde::Serialize;

use crate::models::{LeagueDescriptor, MatchRecord};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per league: key, external id, display name.
pub fn league_table(leagues: &[LeagueDescriptor]) -> String {
    let key_width = leagues.iter().map(|l| l.key.len()).max().unwrap_or(0);
    let id_width = leagues
        .iter()
        .map(|l| l.external_id.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(0);

    leagues
        .iter()
        .map(|l| {
            format!(
                "{:<kw$}  {:<iw$}  {}",
                l.key,
                l.external_id.as_deref().unwrap_or("-"),
                l.display_name,
                kw = key_width,
                iw = id_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `2025-01-04  Arsenal  2-1  Chelsea  #704512 (+stats)`
pub fn match_line(m: &MatchRecord) -> String {
    let date = match m.kickoff_date() {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => m.date_label().unwrap_or("????-??-??").to_string(),
    };
    let mut line = format!(
        "{}  {}  {}  {}",
        date,
        m.home_team().unwrap_or("?"),
        m.score().unwrap_or("-"),
        m.away_team().unwrap_or("?")
    );
    if let Some(id) = m.game_id() {
        line.push_str(&format!("  #{id}"));
    }
    if m.has_stats() {
        line.push_str(" (+stats)");
    }
    line
}
