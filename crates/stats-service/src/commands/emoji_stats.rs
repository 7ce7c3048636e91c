//! Single-emoji stats command

use tracing::{error, instrument};

use crate::format::format_emoji_stats;
use crate::services::{ServiceError, ServiceResult, StatsService};

use super::date::parse_date_range;

/// Response when the emoji has no recorded uses
const NO_REACTIONS_MESSAGE: &str = "No reactions found for this emoji.";

/// Handler for the single-emoji statistics command
pub struct EmojiStatsCommand {
    service: StatsService,
}

impl EmojiStatsCommand {
    /// Create a new EmojiStatsCommand
    pub fn new(service: StatsService) -> Self {
        Self { service }
    }

    /// Run the command and render the response markdown.
    ///
    /// Zero recorded uses is not an error; it renders a "no reactions"
    /// response instead of a stats block.
    #[instrument(skip(self))]
    pub async fn run(
        &self,
        guild_id: &str,
        emoji_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ServiceResult<String> {
        if emoji_id.is_empty() {
            return Err(ServiceError::MissingEmoji);
        }

        let range = parse_date_range(start_date, end_date)?;

        let stats = self
            .service
            .emoji_stats(guild_id, emoji_id, &range)
            .await
            .inspect_err(
                |e| error!(error = %e, guild_id, emoji_id, "failed to get emoji stats"),
            )?;

        if stats.total_uses == 0 {
            return Ok(NO_REACTIONS_MESSAGE.to_string());
        }

        Ok(format_emoji_stats(&stats, guild_id))
    }
}
