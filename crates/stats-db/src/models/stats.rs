//! Aggregation row models
//!
//! Each struct matches the column list of exactly one query shape in the
//! stats repository. Sender and receiver queries both alias their grouped
//! column to `user_id` so they share a model.

use sqlx::FromRow;

/// Row for plain `COUNT(*)` totals
#[derive(Debug, Clone, FromRow)]
pub struct TotalCountModel {
    pub count: i64,
}

/// Row for the top-emojis grouping, keyed by `(emoji_id, is_default)`
#[derive(Debug, Clone, FromRow)]
pub struct EmojiCountModel {
    pub emoji_id: String,
    pub is_default: bool,
    pub count: i64,
}

/// Row for top-senders/top-receivers groupings
#[derive(Debug, Clone, FromRow)]
pub struct UserCountModel {
    pub user_id: String,
    pub count: i64,
}

/// Row for the top-messages grouping, keyed by `(message_id, channel_id)`
#[derive(Debug, Clone, FromRow)]
pub struct MessageCountModel {
    pub message_id: String,
    pub channel_id: String,
    pub count: i64,
}

/// Row for a single emoji's total uses and stored default flag
#[derive(Debug, Clone, FromRow)]
pub struct EmojiUsageModel {
    pub count: i64,
    pub is_default: bool,
}
