//! Guild stats command

use tracing::{error, instrument};

use crate::format::format_guild_stats;
use crate::services::{ServiceResult, StatsService};

use super::date::parse_date_range;

/// Handler for the guild-wide reaction statistics command
pub struct StatsCommand {
    service: StatsService,
}

impl StatsCommand {
    /// Create a new StatsCommand
    pub fn new(service: StatsService) -> Self {
        Self { service }
    }

    /// Run the command and render the response markdown
    #[instrument(skip(self))]
    pub async fn run(
        &self,
        guild_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> ServiceResult<String> {
        let range = parse_date_range(start_date, end_date)?;

        let stats = self
            .service
            .guild_stats(guild_id, &range)
            .await
            .inspect_err(|e| error!(error = %e, guild_id, "failed to get guild stats"))?;

        Ok(format_guild_stats(&stats))
    }
}
