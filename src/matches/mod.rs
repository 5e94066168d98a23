pub mod fs;
pub mod store;

pub use fs::FileMatchStore;
pub use store::MatchStore;

use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::LeagueCatalog;
use crate::error::LeagueError;
use crate::models::{LeagueDescriptor, MatchRecord};

/// Number of played matches returned when the caller does not ask for a count.
pub const DEFAULT_RECENT_LIMIT: NonZeroUsize = match NonZeroUsize::new(15) {
    Some(n) => n,
    None => unreachable!(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentMatchesOptions {
    /// Maximum number of *played* matches to return
    pub limit: NonZeroUsize,
    /// Keep the per-match `stats` payload
    pub include_stats: bool,
}

impl Default for RecentMatchesOptions {
    fn default() -> Self {
        RecentMatchesOptions {
            limit: DEFAULT_RECENT_LIMIT,
            include_stats: true,
        }
    }
}

impl RecentMatchesOptions {
    pub fn with_limit(mut self, limit: NonZeroUsize) -> Self {
        self.limit = limit;
        self
    }

    pub fn without_stats(mut self) -> Self {
        self.include_stats = false;
        self
    }
}

/// Pick the most recent played matches out of an archive stored oldest-first.
///
/// Unplayed fixtures are dropped before the limit is applied, and the result
/// is ordered most recent first.
pub fn select_recent(records: &[MatchRecord], options: &RecentMatchesOptions) -> Vec<MatchRecord> {
    let played: Vec<&MatchRecord> = records.iter().filter(|m| m.is_played()).collect();
    let skip = played.len().saturating_sub(options.limit.get());

    played[skip..]
        .iter()
        .rev()
        .map(|m| {
            if options.include_stats {
                (*m).clone()
            } else {
                m.without_stats()
            }
        })
        .collect()
}

/// Read-only access to league match archives.
///
/// Stateless apart from the immutable catalog: every query goes back to the
/// store, so concurrent callers never share mutable state.
#[derive(Clone)]
pub struct MatchRepository {
    catalog: Arc<LeagueCatalog>,
    store: Arc<dyn MatchStore>,
}

impl MatchRepository {
    pub fn new(catalog: Arc<LeagueCatalog>, store: Arc<dyn MatchStore>) -> Self {
        MatchRepository { catalog, store }
    }

    pub fn catalog(&self) -> &LeagueCatalog {
        &self.catalog
    }

    /// Resolve `league` by key or external id.
    pub fn league(&self, league: &str) -> Result<&LeagueDescriptor, LeagueError> {
        self.catalog.lookup(league)
    }

    /// Full archive of a league in stored order.
    pub async fn league_matches(&self, league: &str) -> Result<Vec<MatchRecord>, LeagueError> {
        let descriptor = self.catalog.lookup(league)?;
        self.store.load(descriptor).await
    }

    /// The last `options.limit` played matches of `league`, most recent first.
    pub async fn recent_matches(
        &self,
        league: &str,
        options: &RecentMatchesOptions,
    ) -> Result<Vec<MatchRecord>, LeagueError> {
        let descriptor = self.catalog.lookup(league)?;
        let records = self.store.load(descriptor).await?;
        let recent = select_recent(&records, options);

        debug!(
            "{} via {} store: {} stored, {} returned (limit={}, stats={})",
            descriptor.key,
            self.store.name(),
            records.len(),
            recent.len(),
            options.limit,
            options.include_stats
        );
        if recent.is_empty() {
            info!("No played matches recorded for {}", descriptor.key);
        }
        Ok(recent)
    }
}
