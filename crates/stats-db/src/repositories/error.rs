//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use stats_core::error::StatsError;

/// Convert a write-path SQLx error to the domain error
pub fn map_write_error(e: SqlxError) -> StatsError {
    StatsError::StoreUnavailable(e.to_string())
}

/// Convert a read-path SQLx error to the domain error
pub fn map_query_error(e: SqlxError) -> StatsError {
    StatsError::QueryFailed(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_paths_map_to_distinct_kinds() {
        let write = map_write_error(SqlxError::PoolClosed);
        assert_eq!(write.code(), "STORE_UNAVAILABLE");

        let read = map_query_error(SqlxError::PoolClosed);
        assert_eq!(read.code(), "QUERY_FAILED");
    }
}
