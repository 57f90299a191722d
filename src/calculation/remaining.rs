//! Cap headroom.
//!
//! Converts observed totals into `cap - observed` for the reporting sink. The
//! caps come from the policy; nothing here assumes particular values.

use crate::config::RollingCaps;
use crate::models::{DailySeriesPoint, MonthlyAggregatePoint, RemainingPoint};

/// Headroom under the rolling caps for one daily point.
pub fn remaining_for_day(point: &DailySeriesPoint, caps: &RollingCaps) -> RemainingPoint {
    RemainingPoint {
        date: point.date,
        days_outside_remaining: caps.days_outside - point.days_outside,
        remote_days_remaining: caps.remote_working_days - point.remote_working_days,
    }
}

/// Headroom under the rolling caps for one month's worst case.
pub fn remaining_for_month(point: &MonthlyAggregatePoint, caps: &RollingCaps) -> RemainingPoint {
    RemainingPoint {
        date: point.representative_date,
        days_outside_remaining: caps.days_outside - point.max_days_outside,
        remote_days_remaining: caps.remote_working_days - point.max_remote_working_days,
    }
}

/// Maps a daily series to headroom lazily, preserving order.
pub fn remaining_series<I>(series: I, caps: RollingCaps) -> impl Iterator<Item = RemainingPoint>
where
    I: IntoIterator<Item = DailySeriesPoint>,
{
    series
        .into_iter()
        .map(move |point| remaining_for_day(&point, &caps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_remaining_for_day() {
        let point = DailySeriesPoint {
            date: make_date("2024-02-01"),
            days_outside: 7,
            remote_working_days: 9,
        };

        let remaining = remaining_for_day(&point, &RollingCaps::default());

        assert_eq!(remaining.date, make_date("2024-02-01"));
        assert_eq!(remaining.days_outside_remaining, 173);
        assert_eq!(remaining.remote_days_remaining, 81);
    }

    #[test]
    fn test_remaining_goes_negative_on_breach() {
        let point = DailySeriesPoint {
            date: make_date("2024-02-01"),
            days_outside: 200,
            remote_working_days: 90,
        };

        let remaining = remaining_for_day(&point, &RollingCaps::default());

        assert_eq!(remaining.days_outside_remaining, -20);
        assert_eq!(remaining.remote_days_remaining, 0);
    }

    #[test]
    fn test_remaining_for_month_uses_maxima() {
        let point = MonthlyAggregatePoint {
            representative_date: make_date("2024-03-16"),
            max_days_outside: 120,
            max_remote_working_days: 45,
        };
        let caps = RollingCaps {
            days_outside: 150,
            remote_working_days: 60,
        };

        let remaining = remaining_for_month(&point, &caps);

        assert_eq!(remaining.date, make_date("2024-03-16"));
        assert_eq!(remaining.days_outside_remaining, 30);
        assert_eq!(remaining.remote_days_remaining, 15);
    }

    #[test]
    fn test_remaining_series_preserves_order() {
        let series = vec![
            DailySeriesPoint {
                date: make_date("2024-01-01"),
                days_outside: 1,
                remote_working_days: 1,
            },
            DailySeriesPoint {
                date: make_date("2024-01-02"),
                days_outside: 2,
                remote_working_days: 2,
            },
        ];

        let remaining: Vec<RemainingPoint> =
            remaining_series(series, RollingCaps::default()).collect();

        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].days_outside_remaining, 179);
        assert_eq!(remaining[1].days_outside_remaining, 178);
        assert_eq!(remaining[1].remote_days_remaining, 88);
    }
}
