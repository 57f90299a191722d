//! Window and window result models.
//!
//! This module contains the [`Window`] value object, the inclusive date range
//! a set of travel intervals is evaluated against, and [`WindowResult`], the
//! totals produced by one evaluation.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` range of calendar days.
///
/// A rolling window ends at an anchor date and starts a fixed number of days
/// before it. A fixed window keeps its start while the end moves.
///
/// # Example
///
/// ```
/// use residency_engine::models::Window;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let window = Window::rolling(anchor, 365);
///
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
/// assert_eq!(window.end, anchor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// The first day of the window (inclusive).
    pub start: NaiveDate,
    /// The last day of the window (inclusive), i.e. the anchor date.
    pub end: NaiveDate,
}

impl Window {
    /// Creates a window ending at `anchor` and starting `lookback_days` before it.
    ///
    /// A lookback reaching past the earliest representable date saturates there.
    pub fn rolling(anchor: NaiveDate, lookback_days: u32) -> Self {
        let start = anchor
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: anchor }
    }

    /// Creates a window with an explicit start, ending at `anchor`.
    pub fn fixed(start: NaiveDate, anchor: NaiveDate) -> Self {
        Self { start, end: anchor }
    }
}

/// The totals produced by evaluating all travel intervals against one window.
///
/// Either total may be negative: very short or heavily clipped trips contribute
/// a negative count under the boundary-day discount unless clamping is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowResult {
    /// Days spent outside the jurisdiction within the window.
    pub days_outside: i64,
    /// Remote-working days within the window.
    pub remote_working_days: i64,
}
