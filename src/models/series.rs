//! Time series point models.
//!
//! Points produced by the rolling sweep, the monthly aggregator, and the
//! cap-headroom projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WindowResult;

/// One point of a daily series: the window totals anchored at `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailySeriesPoint {
    /// The anchor date of the window.
    pub date: NaiveDate,
    /// Days outside within the window ending at `date`.
    pub days_outside: i64,
    /// Remote-working days within the window ending at `date`.
    pub remote_working_days: i64,
}

impl DailySeriesPoint {
    /// Creates a point from an anchor date and the window totals at that date.
    pub fn new(date: NaiveDate, result: WindowResult) -> Self {
        Self {
            date,
            days_outside: result.days_outside,
            remote_working_days: result.remote_working_days,
        }
    }
}

/// One calendar month of a daily series, reduced to its worst case.
///
/// # Example
///
/// ```
/// use residency_engine::models::MonthlyAggregatePoint;
/// use chrono::NaiveDate;
///
/// let point = MonthlyAggregatePoint {
///     representative_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///     max_days_outside: 42,
///     max_remote_working_days: 17,
/// };
/// assert_eq!(point.max_days_outside, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthlyAggregatePoint {
    /// The date at the middle index of the month's points.
    pub representative_date: NaiveDate,
    /// The largest days-outside value observed in the month.
    pub max_days_outside: i64,
    /// The largest remote-working-days value observed in the month.
    pub max_remote_working_days: i64,
}

/// Headroom left under the rolling caps on a given date.
///
/// Values go negative once a cap is breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemainingPoint {
    /// The date this headroom applies to.
    pub date: NaiveDate,
    /// `days_outside cap - observed days outside`.
    pub days_outside_remaining: i64,
    /// `remote days cap - observed remote-working days`.
    pub remote_days_remaining: i64,
}
