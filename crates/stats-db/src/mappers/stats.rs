//! Aggregation row <-> entity mappers

use stats_core::entities::{EmojiCount, MessageCount, UserCount};

use crate::models::{EmojiCountModel, MessageCountModel, UserCountModel};

impl From<EmojiCountModel> for EmojiCount {
    fn from(model: EmojiCountModel) -> Self {
        EmojiCount {
            emoji_id: model.emoji_id,
            is_default: model.is_default,
            count: model.count,
        }
    }
}

impl From<UserCountModel> for UserCount {
    fn from(model: UserCountModel) -> Self {
        UserCount {
            user_id: model.user_id,
            count: model.count,
        }
    }
}

impl From<MessageCountModel> for MessageCount {
    fn from(model: MessageCountModel) -> Self {
        MessageCount {
            message_id: model.message_id,
            channel_id: model.channel_id,
            count: model.count,
        }
    }
}
