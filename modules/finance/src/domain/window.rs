//! Calendar-month date windows for list filters and reports.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Inclusive window covering one calendar month: first instant of the month
/// through the last day at 23:59:59. Returns None for an invalid month.
pub fn month_window(month: u32, year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;

    let start = Utc.from_utc_datetime(&first.and_hms_opt(0, 0, 0)?);
    let end = Utc.from_utc_datetime(&last.and_hms_opt(23, 59, 59)?);
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn march_window() {
        let (start, end) = month_window(3, 2026).unwrap();
        assert_eq!(start.to_rfc3339(), "2026-03-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-03-31T23:59:59+00:00");
    }

    #[test]
    fn february_leap_year() {
        let (_, end) = month_window(2, 2024).unwrap();
        assert_eq!(end.to_rfc3339(), "2024-02-29T23:59:59+00:00");
    }

    #[test]
    fn december_rolls_into_next_year() {
        let (_, end) = month_window(12, 2026).unwrap();
        assert_eq!(end.to_rfc3339(), "2026-12-31T23:59:59+00:00");
    }

    #[test]
    fn invalid_month_is_none() {
        assert!(month_window(0, 2026).is_none());
        assert!(month_window(13, 2026).is_none());
    }
}
