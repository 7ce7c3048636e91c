//! Error types for the reaction store and aggregation engine

use thiserror::Error;

/// Errors surfaced by the store and the aggregation engine
///
/// Anomalous removals (deleted count other than one) are not errors; they are
/// reported through [`crate::entities::RemovalReceipt`] and logged by callers.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A write was attempted with a missing required identifier.
    /// The offending event is dropped after logging; nothing was inserted.
    #[error("invalid input: missing {0}")]
    InvalidInput(&'static str),

    /// The durable store could not be reached or written.
    /// The core performs no retry; a dropped event stays dropped.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// A read-path query failed or was canceled mid-aggregate.
    /// The whole aggregate request fails; partial aggregates are never returned.
    #[error("query failed: {0}")]
    QueryFailed(String),
}

impl StatsError {
    /// Get an error code string for upstream reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::QueryFailed(_) => "QUERY_FAILED",
        }
    }

    /// Check if this error came from the write path
    pub fn is_write(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::StoreUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StatsError::InvalidInput("guild_id").code(), "INVALID_INPUT");
        assert_eq!(
            StatsError::StoreUnavailable("connection refused".to_string()).code(),
            "STORE_UNAVAILABLE"
        );
        assert_eq!(
            StatsError::QueryFailed("canceled".to_string()).code(),
            "QUERY_FAILED"
        );
    }

    #[test]
    fn test_error_display() {
        let err = StatsError::InvalidInput("sender_user_id");
        assert_eq!(err.to_string(), "invalid input: missing sender_user_id");
    }

    #[test]
    fn test_is_write() {
        assert!(StatsError::InvalidInput("guild_id").is_write());
        assert!(StatsError::StoreUnavailable(String::new()).is_write());
        assert!(!StatsError::QueryFailed(String::new()).is_write());
    }
}
