use async_trait::async_trait;

use crate::error::LeagueError;
use crate::models::{LeagueDescriptor, MatchRecord};

/// Backing storage for league match archives.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Read the full archive of a league, in stored (oldest-first) order.
    async fn load(&self, league: &LeagueDescriptor) -> Result<Vec<MatchRecord>, LeagueError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
