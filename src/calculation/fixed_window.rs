//! Fixed-epoch accumulation.
//!
//! Cumulative totals measured against long-horizon caps: a window whose start
//! is a constant calendar date (or a long lookback), and the all-time total of
//! every recorded trip.

use chrono::NaiveDate;

use crate::config::{CountingRules, NegativeContributionRule};
use crate::models::{TravelInterval, Window};

use super::window_count::{BOUNDARY_DAY_DISCOUNT, accumulate_window};

/// Counts days outside between `window_start` and `anchor`, inclusive.
///
/// Uses the same overlap, clip and boundary-day discount as
/// [`super::count_window`]; only the window start differs.
///
/// # Example
///
/// ```
/// use residency_engine::calculation::count_fixed_window;
/// use residency_engine::config::CountingRules;
/// use residency_engine::models::TravelInterval;
/// use chrono::NaiveDate;
///
/// let trips = vec![TravelInterval::new(
///     NaiveDate::from_ymd_opt(2020, 8, 20).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 9, 11).unwrap(),
///     true,
///     0,
/// )
/// .unwrap()];
///
/// let since = NaiveDate::from_ymd_opt(2020, 9, 1).unwrap();
/// let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// // 22 day span, 12 days before the epoch, less 2 travel days.
/// assert_eq!(count_fixed_window(&trips, anchor, since, &CountingRules::default()), 8);
/// ```
pub fn count_fixed_window(
    intervals: &[TravelInterval],
    anchor: NaiveDate,
    window_start: NaiveDate,
    rules: &CountingRules,
) -> i64 {
    accumulate_window(intervals, &Window::fixed(window_start, anchor), rules).days_outside
}

/// Sums the discounted length of every recorded trip, with no window applied.
pub fn count_all_time(intervals: &[TravelInterval], rules: &CountingRules) -> i64 {
    intervals
        .iter()
        .map(|interval| {
            let days = interval.raw_span_days() - BOUNDARY_DAY_DISCOUNT;
            match rules.negative_contributions {
                NegativeContributionRule::Allow => days,
                NegativeContributionRule::ClampToZero => days.max(0),
            }
        })
        .sum()
}
