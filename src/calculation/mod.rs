//! Calculation logic for the Residency Day-Counting Engine.
//!
//! This module contains the day-counting functions: the rolling window
//! counter with its overlap, clip and boundary-day discount, the fixed-epoch
//! and all-time accumulators built on the same logic, the rolling sweep that
//! produces a daily series, the monthly max aggregation, cap headroom, and
//! report assembly.

mod fixed_window;
mod monthly_max;
mod remaining;
mod report;
mod sweep;
mod window_count;

pub use fixed_window::{count_all_time, count_fixed_window};
pub use monthly_max::aggregate_monthly;
pub use remaining::{remaining_for_day, remaining_for_month, remaining_series};
pub use report::{ReportOptions, build_report};
pub use sweep::{DailySeries, default_sweep_start, sweep};
pub use window_count::{
    BOUNDARY_DAY_DISCOUNT, DEFAULT_LOOKBACK_DAYS, accumulate_window, count_window,
    interval_contribution,
};
