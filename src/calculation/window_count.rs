//! Rolling window day counting.
//!
//! This module overlaps each travel interval with a window, clips the part of
//! the trip that falls outside the window on either boundary, and discounts
//! the calendar days of departure and arrival. Every other counter in the
//! crate is built on [`accumulate_window`].

use chrono::NaiveDate;

use crate::config::{CountingRules, NegativeContributionRule, RemoteDayRule};
use crate::models::{TravelInterval, Window, WindowResult};

/// Default length of the rolling window in days.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Days not counted per trip: the day of departure and the day of arrival.
pub const BOUNDARY_DAY_DISCOUNT: i64 = 2;

/// Counts days outside and remote-working days in the window of
/// `lookback_days` ending at `anchor`.
///
/// The window is `[anchor - lookback_days, anchor]`. For each overlapping
/// interval the contribution to days outside is
/// `raw span - clipped days - 2`, and, for non-exempt trips, the contribution
/// to remote-working days follows `rules.remote_days` less the trip's annual
/// leave.
///
/// # Examples
///
/// ```
/// use residency_engine::calculation::{count_window, DEFAULT_LOOKBACK_DAYS};
/// use residency_engine::config::CountingRules;
/// use residency_engine::models::TravelInterval;
/// use chrono::NaiveDate;
///
/// let trips = vec![TravelInterval::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     false,
///     0,
/// )
/// .unwrap()];
///
/// // Window fully covers the trip: 9 days less the two travel days.
/// let anchor = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let result = count_window(&trips, anchor, DEFAULT_LOOKBACK_DAYS, &CountingRules::default());
/// assert_eq!(result.days_outside, 7);
///
/// // Window ends mid-trip: 5 days after the anchor are clipped.
/// let anchor = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let result = count_window(&trips, anchor, DEFAULT_LOOKBACK_DAYS, &CountingRules::default());
/// assert_eq!(result.days_outside, 2);
/// ```
pub fn count_window(
    intervals: &[TravelInterval],
    anchor: NaiveDate,
    lookback_days: u32,
    rules: &CountingRules,
) -> WindowResult {
    accumulate_window(intervals, &Window::rolling(anchor, lookback_days), rules)
}

/// Sums the contribution of every interval to an explicit window.
///
/// A window whose start is after its end covers no days and yields zero.
pub fn accumulate_window(
    intervals: &[TravelInterval],
    window: &Window,
    rules: &CountingRules,
) -> WindowResult {
    if window.start > window.end {
        return WindowResult::default();
    }

    intervals
        .iter()
        .filter_map(|interval| interval_contribution(interval, window, rules))
        .fold(WindowResult::default(), |acc, contribution| WindowResult {
            days_outside: acc.days_outside + contribution.days_outside,
            remote_working_days: acc.remote_working_days + contribution.remote_working_days,
        })
}

/// Computes one interval's contribution to a window.
///
/// Returns `None` when the interval does not overlap the window at all.
pub fn interval_contribution(
    interval: &TravelInterval,
    window: &Window,
    rules: &CountingRules,
) -> Option<WindowResult> {
    let departure = interval.departure_date();
    let arrival = interval.arrival_date();

    if arrival < window.start || departure > window.end {
        return None;
    }

    let before_window = (window.start - departure).num_days().max(0);
    let after_window = (arrival - window.end).num_days().max(0);
    let clipped_span = interval.raw_span_days() - before_window - after_window;
    let overlap_days = clipped_span - BOUNDARY_DAY_DISCOUNT;

    let remote_working_days = if interval.remote_work_exempt() {
        0
    } else {
        let remote_base = match rules.remote_days {
            RemoteDayRule::BoundaryDaysIncluded => clipped_span,
            RemoteDayRule::BoundaryDaysDiscounted => overlap_days,
        };
        remote_base - i64::from(interval.annual_leave_days())
    };

    let contribution = WindowResult {
        days_outside: overlap_days,
        remote_working_days,
    };

    Some(match rules.negative_contributions {
        NegativeContributionRule::Allow => contribution,
        NegativeContributionRule::ClampToZero => WindowResult {
            days_outside: contribution.days_outside.max(0),
            remote_working_days: contribution.remote_working_days.max(0),
        },
    })
}
