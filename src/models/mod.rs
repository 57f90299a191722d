//! Core data models for the Residency Day-Counting Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod report;
mod series;
mod travel_interval;
mod window;

pub use report::{CapStatus, FixedEpochTotal, ReportSeries, ResidencyReport, SeriesGranularity};
pub use series::{DailySeriesPoint, MonthlyAggregatePoint, RemainingPoint};
pub use travel_interval::TravelInterval;
pub use window::{Window, WindowResult};
