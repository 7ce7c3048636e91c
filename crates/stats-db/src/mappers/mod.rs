//! Model to entity mappers
//!
//! Conversions from aggregation query rows to the domain aggregate entries
//! defined in stats-core.

mod stats;
