//! Date range - optional bounds for filtering by `created_at`
//!
//! The start bound is inclusive and the end bound is exclusive; queries only
//! ever apply `created_at >= start` and `created_at < end`. Callers working in
//! whole days convert an inclusive end date by advancing it one day before
//! building the range.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional date range for filtering queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound on `created_at`
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created_at`
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Create a range with explicit bounds
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Build a range from whole calendar days, with both days included.
    ///
    /// The end day is advanced to the start of the following day so the
    /// exclusive upper bound covers the entire end date.
    pub fn from_inclusive_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.map(start_of_day),
            end: end.map(|d| start_of_day(d + Duration::days(1))),
        }
    }

    /// Whether neither bound is set
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
