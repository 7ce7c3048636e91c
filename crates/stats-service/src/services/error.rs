//! Service layer error types

use thiserror::Error;

use stats_core::error::StatsError;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store or aggregation failure from the domain layer
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// A supplied date string was not a valid `YYYY-MM-DD` date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The emoji-stats command was invoked without an emoji
    #[error("no emoji provided")]
    MissingEmoji,
}

impl ServiceError {
    /// The message shown to the platform user when a command fails
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Stats(_) => "Failed to retrieve statistics.",
            Self::InvalidDate(_) => "Invalid date format. Please use YYYY-MM-DD.",
            Self::MissingEmoji => "Please provide an emoji.",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_user_message() {
        let err = ServiceError::InvalidDate("2024-13-01".to_string());
        assert_eq!(err.user_message(), "Invalid date format. Please use YYYY-MM-DD.");
    }

    #[test]
    fn test_stats_error_user_message() {
        let err = ServiceError::from(StatsError::QueryFailed("timeout".to_string()));
        assert_eq!(err.user_message(), "Failed to retrieve statistics.");
    }

    #[test]
    fn test_stats_error_is_transparent() {
        let err = ServiceError::from(StatsError::StoreUnavailable("down".to_string()));
        assert_eq!(err.to_string(), "store unavailable: down");
    }
}
