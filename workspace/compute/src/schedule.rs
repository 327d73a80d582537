//! Installment date generation.
//!
//! Schedules are generated only when the caller has an explicit start date
//! and a positive installment count; both functions are plain date strides
//! from that start.

use chrono::{Days, Months, NaiveDate};

use crate::error::{ComputeError, Result};

/// Dates spaced one calendar month apart, starting at `start`.
///
/// Month addition clamps to the last day of shorter months, so a schedule
/// starting Jan 31 lands on Feb 28 (or 29) and Mar 31.
pub fn monthly_dates(start: NaiveDate, count: u32) -> Result<Vec<NaiveDate>> {
    (0..count)
        .map(|i| {
            start
                .checked_add_months(Months::new(i))
                .ok_or(ComputeError::CalendarOverflow(i))
        })
        .collect()
}

/// Dates spaced exactly seven days apart, starting at `start`.
pub fn weekly_dates(start: NaiveDate, count: u32) -> Result<Vec<NaiveDate>> {
    (0..count)
        .map(|i| {
            start
                .checked_add_days(Days::new(u64::from(i) * 7))
                .ok_or(ComputeError::CalendarOverflow(i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_dates_stride_one_calendar_month() {
        let dates = monthly_dates(date(2026, 1, 15), 4).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2026, 1, 15),
                date(2026, 2, 15),
                date(2026, 3, 15),
                date(2026, 4, 15),
            ]
        );
    }

    #[test]
    fn test_monthly_dates_clamp_to_month_end() {
        let dates = monthly_dates(date(2026, 1, 31), 3).unwrap();
        assert_eq!(
            dates,
            vec![date(2026, 1, 31), date(2026, 2, 28), date(2026, 3, 31)]
        );
    }

    #[test]
    fn test_monthly_dates_cross_year_boundary() {
        let dates = monthly_dates(date(2026, 11, 10), 3).unwrap();
        assert_eq!(
            dates,
            vec![date(2026, 11, 10), date(2026, 12, 10), date(2027, 1, 10)]
        );
    }

    #[test]
    fn test_weekly_dates_stride_seven_days() {
        let dates = weekly_dates(date(2026, 1, 15), 5).unwrap();
        assert_eq!(dates.len(), 5);
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
        assert_eq!(dates[4], date(2026, 2, 12));
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(monthly_dates(date(2026, 1, 1), 0).unwrap().is_empty());
        assert!(weekly_dates(date(2026, 1, 1), 0).unwrap().is_empty());
    }
}
