//! Date-range option parsing

use chrono::NaiveDate;

use stats_core::value_objects::DateRange;

use crate::services::ServiceError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse optional `YYYY-MM-DD` command options into a [`DateRange`].
///
/// The end date is made inclusive-of-day by advancing it one day; the engine
/// itself only ever applies `created_at < end`.
pub fn parse_date_range(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<DateRange, ServiceError> {
    let start = start_date.map(parse_date).transpose()?;
    let end = end_date.map(parse_date).transpose()?;
    Ok(DateRange::from_inclusive_days(start, end))
}

fn parse_date(s: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ServiceError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_empty_options() {
        let range = parse_date_range(None, None).unwrap();
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_start_date_only() {
        let range = parse_date_range(Some("2024-01-15"), None).unwrap();

        let start = range.start.unwrap();
        assert_eq!((start.year(), start.month(), start.day()), (2024, 1, 15));
        assert_eq!(start.hour(), 0);
        assert!(range.end.is_none());
    }

    #[test]
    fn test_end_date_is_made_inclusive() {
        let range = parse_date_range(None, Some("2024-01-20")).unwrap();

        assert!(range.start.is_none());
        // End date advances one day so the whole of Jan 20 is covered
        let end = range.end.unwrap();
        assert_eq!((end.year(), end.month(), end.day()), (2024, 1, 21));
    }

    #[test]
    fn test_both_dates() {
        let range = parse_date_range(Some("2024-01-01"), Some("2024-01-31")).unwrap();

        assert_eq!(range.start.unwrap().day(), 1);
        assert_eq!(range.end.unwrap().month(), 2);
        assert_eq!(range.end.unwrap().day(), 1);
    }

    #[test]
    fn test_invalid_date() {
        let err = parse_date_range(Some("01/15/2024"), None).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDate(_)));
        assert_eq!(err.user_message(), "Invalid date format. Please use YYYY-MM-DD.");
    }

    #[test]
    fn test_invalid_end_date() {
        let err = parse_date_range(None, Some("2024-13-01")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidDate(_)));
    }
}
