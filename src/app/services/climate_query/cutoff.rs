//! Date helpers for building text filters over the `date` column

use crate::constants::DATE_FORMAT;
use chrono::{Days, NaiveDate};

/// Earliest date (inclusive) of a window ending at `today`
///
/// Saturates at [`NaiveDate::MIN`] instead of overflowing.
pub fn cutoff_before(today: NaiveDate, window: Days) -> NaiveDate {
    today.checked_sub_days(window).unwrap_or(NaiveDate::MIN)
}

/// Render a date the way the dataset stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whether `value` is a zero-padded "YYYY-MM-DD" calendar date
///
/// Only such strings order chronologically under text comparison.
pub fn is_iso_date(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_cutoff_before_spans_year() {
        assert_eq!(
            cutoff_before(date("2017-08-23"), Days::new(365)),
            date("2016-08-23")
        );
        // 2024 is a leap year, so 365 days back lands one day later
        assert_eq!(
            cutoff_before(date("2024-03-01"), Days::new(365)),
            date("2023-03-02")
        );
        assert_eq!(
            cutoff_before(date("2020-01-01"), Days::new(0)),
            date("2020-01-01")
        );
    }

    #[test]
    fn test_cutoff_before_saturates() {
        assert_eq!(
            cutoff_before(date("2020-01-01"), Days::new(u64::MAX)),
            NaiveDate::MIN
        );
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        assert_eq!(format_date(date("2017-08-01")), "2017-08-01");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(987, 1, 2).unwrap()),
            "0987-01-02"
        );
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2017-08-23"));
        assert!(!is_iso_date("2017-8-23"));
        assert!(!is_iso_date("2017-02-30"));
        assert!(!is_iso_date("08/23/2017"));
        assert!(!is_iso_date("precipitation"));
        assert!(!is_iso_date(""));
    }
}
