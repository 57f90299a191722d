//! Monthly max aggregation.
//!
//! Downsamples a daily series to one point per calendar month. Each month
//! keeps its maximum, not its last value or its mean, so a limit breach that
//! lasts only a few days mid-month still shows up in the compressed series.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{DailySeriesPoint, MonthlyAggregatePoint};

/// Running state for one calendar month.
struct MonthAccumulator {
    dates: Vec<NaiveDate>,
    max_days_outside: i64,
    max_remote_working_days: i64,
}

impl MonthAccumulator {
    fn new(point: &DailySeriesPoint) -> Self {
        Self {
            dates: vec![point.date],
            max_days_outside: point.days_outside,
            max_remote_working_days: point.remote_working_days,
        }
    }

    fn push(&mut self, point: &DailySeriesPoint) {
        self.dates.push(point.date);
        self.max_days_outside = self.max_days_outside.max(point.days_outside);
        self.max_remote_working_days = self.max_remote_working_days.max(point.remote_working_days);
    }

    fn finish(self) -> MonthlyAggregatePoint {
        MonthlyAggregatePoint {
            representative_date: self.dates[self.dates.len() / 2],
            max_days_outside: self.max_days_outside,
            max_remote_working_days: self.max_remote_working_days,
        }
    }
}

/// Reduces a daily series to one point per `(year, month)`.
///
/// Months are emitted in the order they are first encountered; points of a
/// month that reappears later are folded into that month's existing entry.
/// The representative date is the date at the middle index (`len / 2`) of the
/// month's points. An empty series yields an empty result.
///
/// # Example
///
/// ```
/// use residency_engine::calculation::aggregate_monthly;
/// use residency_engine::models::DailySeriesPoint;
/// use chrono::NaiveDate;
///
/// let point = |m, d, days| DailySeriesPoint {
///     date: NaiveDate::from_ymd_opt(2024, m, d).unwrap(),
///     days_outside: days,
///     remote_working_days: 0,
/// };
///
/// let monthly = aggregate_monthly(vec![
///     point(1, 30, 3),
///     point(1, 31, 7),
///     point(2, 1, 10),
///     point(2, 2, 2),
/// ]);
///
/// assert_eq!(monthly.len(), 2);
/// assert_eq!(monthly[0].max_days_outside, 7);
/// assert_eq!(monthly[1].max_days_outside, 10);
/// ```
pub fn aggregate_monthly<I>(series: I) -> Vec<MonthlyAggregatePoint>
where
    I: IntoIterator<Item = DailySeriesPoint>,
{
    let mut months: Vec<MonthAccumulator> = Vec::new();
    let mut index: HashMap<(i32, u32), usize> = HashMap::new();

    for point in series {
        let key = (point.date.year(), point.date.month());
        match index.get(&key) {
            Some(&slot) => months[slot].push(&point),
            None => {
                index.insert(key, months.len());
                months.push(MonthAccumulator::new(&point));
            }
        }
    }

    months.into_iter().map(MonthAccumulator::finish).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn point(date: &str, days_outside: i64, remote_working_days: i64) -> DailySeriesPoint {
        DailySeriesPoint {
            date: make_date(date),
            days_outside,
            remote_working_days,
        }
    }

    #[test]
    fn test_empty_series_yields_empty_result() {
        assert!(aggregate_monthly(Vec::new()).is_empty());
    }

    #[test]
    fn test_max_not_average_per_month() {
        let series = vec![
            point("2024-01-10", 3, 1),
            point("2024-01-20", 7, 0),
            point("2024-02-10", 10, 2),
            point("2024-02-20", 2, 5),
        ];

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].max_days_outside, 7);
        assert_eq!(monthly[0].max_remote_working_days, 1);
        assert_eq!(monthly[1].max_days_outside, 10);
        assert_eq!(monthly[1].max_remote_working_days, 5);
    }

    #[test]
    fn test_transient_mid_month_peak_is_kept() {
        let mut series: Vec<DailySeriesPoint> = (1..=31)
            .map(|day| point(&format!("2024-03-{:02}", day), 150, 80))
            .collect();
        series[14].days_outside = 181;
        series[15].remote_working_days = 91;

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].max_days_outside, 181);
        assert_eq!(monthly[0].max_remote_working_days, 91);
    }

    #[test]
    fn test_representative_date_is_middle_index() {
        let series: Vec<DailySeriesPoint> = (1..=30)
            .map(|day| point(&format!("2024-04-{:02}", day), 0, 0))
            .collect();

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly[0].representative_date, make_date("2024-04-16"));
    }

    #[test]
    fn test_partial_month_uses_its_own_middle() {
        let series = vec![
            point("2024-05-29", 1, 0),
            point("2024-05-30", 2, 0),
            point("2024-05-31", 3, 0),
            point("2024-06-01", 4, 0),
        ];

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly[0].representative_date, make_date("2024-05-30"));
        assert_eq!(monthly[1].representative_date, make_date("2024-06-01"));
    }

    #[test]
    fn test_same_month_of_different_years_is_separate() {
        let series = vec![point("2023-01-15", 5, 0), point("2024-01-15", 9, 0)];

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].max_days_outside, 5);
        assert_eq!(monthly[1].max_days_outside, 9);
    }

    #[test]
    fn test_month_reappearing_later_folds_into_first_entry() {
        let series = vec![
            point("2024-01-10", 3, 1),
            point("2024-01-11", 4, 2),
            point("2024-02-01", 5, 0),
            point("2024-01-20", 8, 6),
        ];

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].representative_date, make_date("2024-01-11"));
        assert_eq!(monthly[0].max_days_outside, 8);
        assert_eq!(monthly[0].max_remote_working_days, 6);
        assert_eq!(monthly[1].representative_date, make_date("2024-02-01"));
        assert_eq!(monthly[1].max_days_outside, 5);
    }

    #[test]
    fn test_negative_values_keep_true_maximum() {
        let series = vec![point("2024-01-01", -2, -4), point("2024-01-02", -1, -3)];

        let monthly = aggregate_monthly(series);

        assert_eq!(monthly[0].max_days_outside, -1);
        assert_eq!(monthly[0].max_remote_working_days, -3);
    }

    fn arb_point() -> impl Strategy<Value = DailySeriesPoint> {
        (0u64..800, -50i64..400, -50i64..200).prop_map(|(offset, days, remote)| {
            DailySeriesPoint {
                date: make_date("2023-01-01") + chrono::Days::new(offset),
                days_outside: days,
                remote_working_days: remote,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_month_max_bounds_every_day(
            series in proptest::collection::vec(arb_point(), 0..200),
        ) {
            let mut series = series;
            series.sort_by_key(|p| p.date);
            let monthly = aggregate_monthly(series.clone());

            let distinct: HashSet<(i32, u32)> =
                series.iter().map(|p| (p.date.year(), p.date.month())).collect();
            prop_assert_eq!(monthly.len(), distinct.len());

            for p in &series {
                let month = monthly
                    .iter()
                    .find(|m| {
                        m.representative_date.year() == p.date.year()
                            && m.representative_date.month() == p.date.month()
                    })
                    .unwrap();
                prop_assert!(month.max_days_outside >= p.days_outside);
                prop_assert!(month.max_remote_working_days >= p.remote_working_days);
            }
        }
    }
}
