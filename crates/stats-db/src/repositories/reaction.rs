//! PostgreSQL implementation of ReactionRepository (write path)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use stats_core::entities::ReactionRecord;
use stats_core::traits::{ReactionRepository, RepoResult};

use super::error::map_write_error;

/// PostgreSQL implementation of ReactionRepository
///
/// Holds no state beyond the pool; every call is a single durable operation
/// and concurrent calls need no coordination.
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn record_add(&self, record: &ReactionRecord) -> RepoResult<()> {
        record.validate()?;

        // created_at comes from the column default at insertion time
        sqlx::query(
            r#"
            INSERT INTO reactions (emoji_id, sender_user_id, receiver_user_id, channel_id, message_id, guild_id, is_default)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.emoji.id())
        .bind(&record.sender_user_id)
        .bind(&record.receiver_user_id)
        .bind(&record.channel_id)
        .bind(&record.message_id)
        .bind(&record.guild_id)
        .bind(record.emoji.is_default())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_remove(
        &self,
        guild_id: &str,
        emoji_id: &str,
        sender_user_id: &str,
        message_id: &str,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE guild_id = $1 AND emoji_id = $2 AND sender_user_id = $3 AND message_id = $4
            "#,
        )
        .bind(guild_id)
        .bind(emoji_id)
        .bind(sender_user_id)
        .bind(message_id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected())
    }
}
