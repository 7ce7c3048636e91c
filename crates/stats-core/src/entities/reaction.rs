//! Reaction record - one durable reaction event
//!
//! Records are created on "reaction added", deleted on "reaction removed",
//! and never updated in place. The store stamps `created_at` at insertion
//! time; it is not part of the entity the caller constructs.

use crate::error::StatsError;
use crate::value_objects::EmojiIdentity;

/// A reaction event to be recorded durably
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRecord {
    pub guild_id: String,
    pub emoji: EmojiIdentity,
    /// The user who added the reaction
    pub sender_user_id: String,
    /// The author of the reacted-to message, resolved at write time
    pub receiver_user_id: String,
    pub channel_id: String,
    pub message_id: String,
}

impl ReactionRecord {
    /// Check that every identifier is present.
    ///
    /// A record with a missing identifier is malformed and must be dropped by
    /// the caller after logging; it is never partially inserted.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.guild_id.is_empty() {
            return Err(StatsError::InvalidInput("guild_id"));
        }
        if self.emoji.id().is_empty() {
            return Err(StatsError::InvalidInput("emoji_id"));
        }
        if self.sender_user_id.is_empty() {
            return Err(StatsError::InvalidInput("sender_user_id"));
        }
        if self.receiver_user_id.is_empty() {
            return Err(StatsError::InvalidInput("receiver_user_id"));
        }
        if self.channel_id.is_empty() {
            return Err(StatsError::InvalidInput("channel_id"));
        }
        if self.message_id.is_empty() {
            return Err(StatsError::InvalidInput("message_id"));
        }
        Ok(())
    }
}

/// Outcome of a reaction retraction
///
/// Exactly one deleted row is the expected case. Zero means the add was never
/// recorded or was already removed; more than one means the at-most-one-live-
/// record assumption was violated. Both are anomalies to report at warn level,
/// never errors that abort processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalReceipt {
    /// Number of rows the retraction deleted
    pub deleted: u64,
}

impl RemovalReceipt {
    /// Create a receipt from a deleted-row count
    pub fn new(deleted: u64) -> Self {
        Self { deleted }
    }

    /// Whether the deleted count deviates from the expected single row
    #[inline]
    pub fn is_anomalous(&self) -> bool {
        self.deleted != 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ReactionRecord {
        ReactionRecord {
            guild_id: "guild1".to_string(),
            emoji: EmojiIdentity::unicode("👍"),
            sender_user_id: "sender1".to_string(),
            receiver_user_id: "receiver1".to_string(),
            channel_id: "chan1".to_string(),
            message_id: "msg1".to_string(),
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_missing_guild_id() {
        let mut r = record();
        r.guild_id.clear();
        assert!(matches!(
            r.validate(),
            Err(StatsError::InvalidInput("guild_id"))
        ));
    }

    #[test]
    fn test_missing_emoji_id() {
        let mut r = record();
        r.emoji = EmojiIdentity::unicode("");
        assert!(matches!(
            r.validate(),
            Err(StatsError::InvalidInput("emoji_id"))
        ));
    }

    #[test]
    fn test_missing_receiver() {
        let mut r = record();
        r.receiver_user_id.clear();
        assert!(matches!(
            r.validate(),
            Err(StatsError::InvalidInput("receiver_user_id"))
        ));
    }

    #[test]
    fn test_removal_receipt() {
        assert!(!RemovalReceipt::new(1).is_anomalous());
        assert!(RemovalReceipt::new(0).is_anomalous());
        assert!(RemovalReceipt::new(2).is_anomalous());
    }
}
