//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Both repositories are stateless: every call
//! is an independent operation on the shared durable store, and any number of
//! calls may run concurrently without coordination.

use async_trait::async_trait;

use crate::entities::{EmojiStats, GuildStats, ReactionRecord};
use crate::error::StatsError;
use crate::value_objects::DateRange;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, StatsError>;

/// Write path: durably records and retracts reaction events
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Append one reaction record. The store stamps `created_at`.
    ///
    /// Fails with [`StatsError::InvalidInput`] when an identifier is missing
    /// and [`StatsError::StoreUnavailable`] on durability failure. The core
    /// never retries; at-most-once write semantics are accepted.
    async fn record_add(&self, record: &ReactionRecord) -> RepoResult<()>;

    /// Delete all records matching the retraction key within the guild and
    /// return the number of rows deleted.
    ///
    /// Any count other than exactly one is an anomaly the caller reports at
    /// warn level; it is never an error.
    async fn record_remove(
        &self,
        guild_id: &str,
        emoji_id: &str,
        sender_user_id: &str,
        message_id: &str,
    ) -> RepoResult<u64>;
}

/// Read path: builds ranked aggregate views over recorded reactions
///
/// Each aggregate is assembled from multiple independent queries with no
/// shared transactional snapshot. Writes landing between the first and last
/// query can make the returned view internally inconsistent (the total
/// reflecting one more event than the breakdowns). Callers needing
/// point-in-time consistency must wrap the engine in their own transaction.
///
/// Cancellation is by dropping the future; deadlines are the caller's to
/// impose (e.g. `tokio::time::timeout`). A query failing mid-aggregate fails
/// the whole call with [`StatsError::QueryFailed`].
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Aggregate stats for a guild, optionally bounded by a date range.
    ///
    /// Absence of matching rows yields zero totals and empty lists.
    async fn guild_stats(&self, guild_id: &str, range: &DateRange) -> RepoResult<GuildStats>;

    /// Detailed stats for one emoji within a guild.
    ///
    /// `emoji_id` matches both identifier spaces; the returned `is_default`
    /// flag comes from the stored records, not from classifying the query key.
    async fn emoji_stats(
        &self,
        guild_id: &str,
        emoji_id: &str,
        range: &DateRange,
    ) -> RepoResult<EmojiStats>;
}
