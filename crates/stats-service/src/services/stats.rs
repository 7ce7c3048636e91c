//! Stats service - read-path entry points
//!
//! Thin facade over the aggregation repository. The weak-consistency
//! property of multi-query aggregates is part of the repository contract and
//! passes through unchanged; callers needing a point-in-time view must wrap
//! these calls in their own transaction.

use std::sync::Arc;

use tracing::instrument;

use stats_core::entities::{EmojiStats, GuildStats};
use stats_core::traits::StatsRepository;
use stats_core::value_objects::DateRange;

use super::error::ServiceResult;

/// Serves aggregate reaction statistics
#[derive(Clone)]
pub struct StatsService {
    repo: Arc<dyn StatsRepository>,
}

impl StatsService {
    /// Create a new StatsService
    pub fn new(repo: Arc<dyn StatsRepository>) -> Self {
        Self { repo }
    }

    /// Aggregate stats for a guild
    #[instrument(skip(self))]
    pub async fn guild_stats(&self, guild_id: &str, range: &DateRange) -> ServiceResult<GuildStats> {
        Ok(self.repo.guild_stats(guild_id, range).await?)
    }

    /// Detailed stats for one emoji within a guild
    #[instrument(skip(self))]
    pub async fn emoji_stats(
        &self,
        guild_id: &str,
        emoji_id: &str,
        range: &DateRange,
    ) -> ServiceResult<EmojiStats> {
        Ok(self.repo.emoji_stats(guild_id, emoji_id, range).await?)
    }
}
