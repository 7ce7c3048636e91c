//! Database models - SQLx-compatible structs for aggregation query rows

mod stats;

pub use stats::{
    EmojiCountModel, EmojiUsageModel, MessageCountModel, TotalCountModel, UserCountModel,
};
