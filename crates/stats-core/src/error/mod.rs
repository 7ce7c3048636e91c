//! Domain errors

mod stats_error;

pub use stats_error::StatsError;
