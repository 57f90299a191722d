//! Rolling sweep over a range of anchor dates.
//!
//! This module provides [`sweep`], which evaluates the rolling window once per
//! calendar day and yields the totals lazily as a [`DailySeries`].

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::config::CountingRules;
use crate::models::{DailySeriesPoint, TravelInterval};

use super::window_count::count_window;

/// A lazy, finite series of daily window totals.
///
/// Each call to `next` evaluates one anchor date against every interval, so
/// a full sweep costs `O(days x intervals)`. The series borrows the intervals
/// and holds no other state, so [`DailySeries::restart`] (or `clone`) yields
/// an identical sequence.
#[derive(Debug, Clone)]
pub struct DailySeries<'a> {
    intervals: &'a [TravelInterval],
    start: NaiveDate,
    end: NaiveDate,
    next: Option<NaiveDate>,
    lookback_days: u32,
    rules: CountingRules,
}

impl DailySeries<'_> {
    /// Returns a fresh series over the same range, from the first day.
    pub fn restart(&self) -> Self {
        Self {
            next: Some(self.start),
            ..self.clone()
        }
    }

    /// The first anchor date of the series.
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// The last anchor date of the series.
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    fn remaining_days(&self) -> usize {
        match self.next {
            Some(next) if next <= self.end => (self.end - next).num_days() as usize + 1,
            _ => 0,
        }
    }
}

impl Iterator for DailySeries<'_> {
    type Item = DailySeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.filter(|date| *date <= self.end)?;
        self.next = date.succ_opt();

        let result = count_window(self.intervals, date, self.lookback_days, &self.rules);
        Some(DailySeriesPoint::new(date, result))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_days();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DailySeries<'_> {}

impl FusedIterator for DailySeries<'_> {}

/// Sweeps the rolling window across every day from `start` to `end` inclusive.
///
/// A range whose start is after its end yields no points.
///
/// # Example
///
/// ```
/// use residency_engine::calculation::{count_window, sweep};
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
/// let rules = CountingRules::default();
/// let day = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
///
/// let points: Vec<_> = sweep(&trips, day, day, 365, rules).collect();
/// assert_eq!(points.len(), 1);
/// assert_eq!(points[0].days_outside, count_window(&trips, day, 365, &rules).days_outside);
/// ```
pub fn sweep(
    intervals: &[TravelInterval],
    start: NaiveDate,
    end: NaiveDate,
    lookback_days: u32,
    rules: CountingRules,
) -> DailySeries<'_> {
    DailySeries {
        intervals,
        start,
        end,
        next: Some(start),
        lookback_days,
        rules,
    }
}

/// Picks the first anchor date of a sweep: the earliest departure on record,
/// or `today` when there are no intervals.
pub fn default_sweep_start(intervals: &[TravelInterval], today: NaiveDate) -> NaiveDate {
    intervals
        .iter()
        .map(TravelInterval::departure_date)
        .min()
        .unwrap_or(today)
}
