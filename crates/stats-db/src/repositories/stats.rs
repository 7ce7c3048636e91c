//! PostgreSQL implementation of StatsRepository (read path)
//!
//! Each aggregate is assembled from independent queries that all share the
//! same filter composition, so the total and the breakdowns are computed over
//! the same predicate. There is no shared snapshot across the queries.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stats_core::entities::{EmojiCount, EmojiStats, GuildStats, MessageCount, UserCount};
use stats_core::traits::{RepoResult, StatsRepository};
use stats_core::value_objects::DateRange;

use crate::filter::ReactionFilter;
use crate::models::{
    EmojiCountModel, EmojiUsageModel, MessageCountModel, TotalCountModel, UserCountModel,
};

use super::error::map_query_error;

/// Ranked list sizes for the guild-wide view
const GUILD_TOP_EMOJIS: i64 = 10;
const GUILD_TOP_USERS: i64 = 3;
/// Ranked list size for every list in the single-emoji view
const EMOJI_TOP_ENTRIES: i64 = 10;

/// PostgreSQL implementation of StatsRepository
#[derive(Clone)]
pub struct PgStatsRepository {
    pool: PgPool,
}

impl PgStatsRepository {
    /// Create a new PgStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn total_reactions(&self, guild_id: &str, range: &DateRange) -> RepoResult<i64> {
        let filter = ReactionFilter::for_guild(guild_id).date_range(range);
        let sql = format!(
            "SELECT COUNT(*) AS count FROM reactions {}",
            filter.where_sql()
        );

        let row: TotalCountModel = filter
            .bind_to(sqlx::query_as(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(row.count)
    }

    async fn top_emojis(
        &self,
        guild_id: &str,
        range: &DateRange,
        limit: i64,
    ) -> RepoResult<Vec<EmojiCount>> {
        let filter = ReactionFilter::for_guild(guild_id).date_range(range);
        let sql = format!(
            "SELECT emoji_id, is_default, COUNT(*) AS count FROM reactions {} \
             GROUP BY emoji_id, is_default ORDER BY count DESC LIMIT {}",
            filter.where_sql(),
            filter.next_placeholder(),
        );

        let rows: Vec<EmojiCountModel> = filter
            .bind_to(sqlx::query_as(&sql))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(rows.into_iter().map(EmojiCount::from).collect())
    }

    async fn top_senders(
        &self,
        guild_id: &str,
        emoji_id: Option<&str>,
        range: &DateRange,
        limit: i64,
    ) -> RepoResult<Vec<UserCount>> {
        let mut filter = ReactionFilter::for_guild(guild_id);
        if let Some(emoji_id) = emoji_id {
            filter = filter.emoji(emoji_id);
        }
        let filter = filter.date_range(range);

        let sql = format!(
            "SELECT sender_user_id AS user_id, COUNT(*) AS count FROM reactions {} \
             GROUP BY sender_user_id ORDER BY count DESC LIMIT {}",
            filter.where_sql(),
            filter.next_placeholder(),
        );

        let rows: Vec<UserCountModel> = filter
            .bind_to(sqlx::query_as(&sql))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(rows.into_iter().map(UserCount::from).collect())
    }

    async fn top_receivers(
        &self,
        guild_id: &str,
        emoji_id: Option<&str>,
        range: &DateRange,
        limit: i64,
    ) -> RepoResult<Vec<UserCount>> {
        let mut filter = ReactionFilter::for_guild(guild_id);
        if let Some(emoji_id) = emoji_id {
            filter = filter.emoji(emoji_id);
        }
        let filter = filter.date_range(range);

        let sql = format!(
            "SELECT receiver_user_id AS user_id, COUNT(*) AS count FROM reactions {} \
             GROUP BY receiver_user_id ORDER BY count DESC LIMIT {}",
            filter.where_sql(),
            filter.next_placeholder(),
        );

        let rows: Vec<UserCountModel> = filter
            .bind_to(sqlx::query_as(&sql))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(rows.into_iter().map(UserCount::from).collect())
    }

    async fn top_messages(
        &self,
        guild_id: &str,
        emoji_id: &str,
        range: &DateRange,
        limit: i64,
    ) -> RepoResult<Vec<MessageCount>> {
        let filter = ReactionFilter::for_guild(guild_id)
            .emoji(emoji_id)
            .date_range(range);

        let sql = format!(
            "SELECT message_id, channel_id, COUNT(*) AS count FROM reactions {} \
             GROUP BY message_id, channel_id ORDER BY count DESC LIMIT {}",
            filter.where_sql(),
            filter.next_placeholder(),
        );

        let rows: Vec<MessageCountModel> = filter
            .bind_to(sqlx::query_as(&sql))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_query_error)?;

        Ok(rows.into_iter().map(MessageCount::from).collect())
    }

    async fn emoji_usage(
        &self,
        guild_id: &str,
        emoji_id: &str,
        range: &DateRange,
    ) -> RepoResult<EmojiUsageModel> {
        let filter = ReactionFilter::for_guild(guild_id)
            .emoji(emoji_id)
            .date_range(range);

        // bool_or over zero rows is NULL, which must read as "not default"
        let sql = format!(
            "SELECT COUNT(*) AS count, COALESCE(bool_or(is_default), false) AS is_default \
             FROM reactions {}",
            filter.where_sql()
        );

        filter
            .bind_to(sqlx::query_as(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(map_query_error)
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    #[instrument(skip(self))]
    async fn guild_stats(&self, guild_id: &str, range: &DateRange) -> RepoResult<GuildStats> {
        let total_reactions = self.total_reactions(guild_id, range).await?;
        let top_emojis = self.top_emojis(guild_id, range, GUILD_TOP_EMOJIS).await?;
        let top_senders = self
            .top_senders(guild_id, None, range, GUILD_TOP_USERS)
            .await?;
        let top_receivers = self
            .top_receivers(guild_id, None, range, GUILD_TOP_USERS)
            .await?;

        Ok(GuildStats {
            total_reactions,
            top_emojis,
            top_senders,
            top_receivers,
        })
    }

    #[instrument(skip(self))]
    async fn emoji_stats(
        &self,
        guild_id: &str,
        emoji_id: &str,
        range: &DateRange,
    ) -> RepoResult<EmojiStats> {
        let usage = self.emoji_usage(guild_id, emoji_id, range).await?;
        let top_messages = self
            .top_messages(guild_id, emoji_id, range, EMOJI_TOP_ENTRIES)
            .await?;
        let top_senders = self
            .top_senders(guild_id, Some(emoji_id), range, EMOJI_TOP_ENTRIES)
            .await?;
        let top_receivers = self
            .top_receivers(guild_id, Some(emoji_id), range, EMOJI_TOP_ENTRIES)
            .await?;

        Ok(EmojiStats {
            emoji_id: emoji_id.to_string(),
            is_default: usage.is_default,
            total_uses: usage.count,
            top_messages,
            top_senders,
            top_receivers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgStatsRepository>();
    }

    #[test]
    fn test_list_limits() {
        assert_eq!(GUILD_TOP_EMOJIS, 10);
        assert_eq!(GUILD_TOP_USERS, 3);
        assert_eq!(EMOJI_TOP_ENTRIES, 10);
    }
}
