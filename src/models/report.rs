//! Residency report models.
//!
//! This module contains the [`ResidencyReport`] type and the structures it is
//! built from: totals measured against caps, and the remaining-days series
//! handed to charting or console sinks.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RemainingPoint, Window, WindowResult};

/// An observed total measured against a cap.
///
/// # Example
///
/// ```
/// use residency_engine::models::CapStatus;
///
/// let status = CapStatus::new("days_outside", 37, 180);
/// assert_eq!(status.remaining, 143);
/// assert!(!status.is_breached());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapStatus {
    /// Name of the limit (e.g., "days_outside", "five_year").
    pub label: String,
    /// The observed total.
    pub observed: i64,
    /// The cap the total is measured against.
    pub cap: i64,
    /// `cap - observed`; negative once the cap is breached.
    pub remaining: i64,
}

impl CapStatus {
    /// Creates a status, computing the remaining headroom.
    pub fn new(label: impl Into<String>, observed: i64, cap: i64) -> Self {
        Self {
            label: label.into(),
            observed,
            cap,
            remaining: cap - observed,
        }
    }

    /// Returns true when the observed total exceeds the cap.
    pub fn is_breached(&self) -> bool {
        self.remaining < 0
    }
}

/// A total accumulated since a fixed window start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEpochTotal {
    /// The window the total was accumulated over.
    pub window: Window,
    /// The total measured against the epoch's cap.
    pub status: CapStatus,
}

/// Resolution of a report's remaining-days series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesGranularity {
    /// One point per calendar day.
    #[default]
    Daily,
    /// One point per calendar month, holding the month's worst case.
    Monthly,
}

/// The remaining-days series of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSeries {
    /// The resolution of `points`.
    pub granularity: SeriesGranularity,
    /// The first anchor date swept (inclusive).
    pub start_date: NaiveDate,
    /// The last anchor date swept (inclusive).
    pub end_date: NaiveDate,
    /// Headroom under the rolling caps, in date order.
    pub points: Vec<RemainingPoint>,
}

/// The complete output of a residency computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidencyReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The rolling window evaluated at the anchor date.
    pub window: Window,
    /// Raw totals for the rolling window.
    pub rolling: WindowResult,
    /// Rolling days outside against its cap.
    pub days_outside: CapStatus,
    /// Rolling remote-working days against its cap.
    pub remote_working_days: CapStatus,
    /// Every trip ever recorded against the cumulative cap.
    pub all_time: CapStatus,
    /// Totals since each configured fixed epoch.
    pub fixed_epochs: Vec<FixedEpochTotal>,
    /// The remaining-days projection.
    pub series: ReportSeries,
}
