//! Aggregate views - computed per request, never persisted

/// An emoji and its usage count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiCount {
    pub emoji_id: String,
    pub is_default: bool,
    pub count: i64,
}

/// A user and their reaction count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCount {
    pub user_id: String,
    pub count: i64,
}

/// A message and its reaction count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCount {
    pub message_id: String,
    pub channel_id: String,
    pub count: i64,
}

/// Aggregated reaction stats for a guild
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildStats {
    pub total_reactions: i64,
    /// Top 10 emojis by count, descending; ties unordered
    pub top_emojis: Vec<EmojiCount>,
    /// Top 3 senders by count
    pub top_senders: Vec<UserCount>,
    /// Top 3 receivers by count
    pub top_receivers: Vec<UserCount>,
}

/// Detailed stats for a single emoji within a guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiStats {
    pub emoji_id: String,
    /// True if any matching record was stored as a built-in emoji
    pub is_default: bool,
    pub total_uses: i64,
    /// Top 10 messages by count
    pub top_messages: Vec<MessageCount>,
    /// Top 10 senders by count
    pub top_senders: Vec<UserCount>,
    /// Top 10 receivers by count
    pub top_receivers: Vec<UserCount>,
}

impl EmojiStats {
    /// An empty view for an emoji with no recorded uses
    pub fn empty(emoji_id: impl Into<String>) -> Self {
        Self {
            emoji_id: emoji_id.into(),
            is_default: false,
            total_uses: 0,
            top_messages: Vec::new(),
            top_senders: Vec::new(),
            top_receivers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_emoji_stats() {
        let stats = EmojiStats::empty("👍");
        assert_eq!(stats.emoji_id, "👍");
        assert_eq!(stats.total_uses, 0);
        assert!(!stats.is_default);
        assert!(stats.top_messages.is_empty());
    }

    #[test]
    fn test_default_guild_stats() {
        let stats = GuildStats::default();
        assert_eq!(stats.total_reactions, 0);
        assert!(stats.top_emojis.is_empty());
    }
}
