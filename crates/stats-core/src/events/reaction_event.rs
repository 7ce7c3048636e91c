//! Reaction notification payload
//!
//! The shape the event source delivers for both "reaction added" and
//! "reaction removed". Delivery is not guaranteed to be idempotent or ordered
//! relative to adds, which is why removals are keyed rather than referenced.

use serde::{Deserialize, Serialize};

use crate::value_objects::EmojiIdentity;

/// A reaction add/remove notification from the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub emoji: EmojiIdentity,
    /// The user who reacted
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_round_trip() {
        let event = ReactionEvent {
            guild_id: "g1".to_string(),
            channel_id: "c1".to_string(),
            message_id: "m1".to_string(),
            emoji: EmojiIdentity::unicode("👍"),
            user_id: "u1".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: ReactionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
