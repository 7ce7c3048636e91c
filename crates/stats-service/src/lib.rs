//! # stats-service
//!
//! Service layer for the reaction statistics engine:
//!
//! - `services` - the event recorder consuming platform reaction
//!   notifications and the stats read service
//! - `commands` - the guild-stats and emoji-stats command handlers with
//!   date-range parsing
//! - `format` - Discord-markdown rendering of aggregate views

pub mod commands;
pub mod format;
pub mod services;

// Re-export commonly used types at crate root
pub use commands::{parse_date_range, EmojiStatsCommand, StatsCommand};
pub use format::{format_emoji_stats, format_guild_stats};
pub use services::{RecorderService, ServiceError, ServiceResult, StatsService};
