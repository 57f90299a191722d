//! Request types for the Residency Day-Counting Engine API.
//!
//! This module defines the request structures for the `/window`, `/report`
//! and `/report/travel-log` endpoints. Travel intervals are validated as they are
//! deserialized, so a handler never sees an interval that arrives before it
//! departs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::ReportOptions;
use crate::config::CountingRules;
use crate::models::{SeriesGranularity, TravelInterval};

/// Request body for the `/window` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRequest {
    /// All known travel intervals, in any order.
    pub intervals: Vec<TravelInterval>,
    /// The last day of the window.
    pub anchor_date: NaiveDate,
    /// Window length; defaults to the policy's lookback.
    #[serde(default)]
    pub lookback_days: Option<u32>,
    /// Counting rules; default to the policy's rules.
    #[serde(default)]
    pub rules: Option<CountingRules>,
}

/// Report parameters shared by the `/report` and `/report/travel-log` endpoints.
///
/// Sent in the JSON body of `/report` and as query parameters of
/// `/report/travel-log`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportParams {
    /// The anchor date; defaults to today (UTC).
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,
    /// First day of the series.
    #[serde(default)]
    pub series_start: Option<NaiveDate>,
    /// Last day of the series.
    #[serde(default)]
    pub series_end: Option<NaiveDate>,
    /// Resolution of the series.
    #[serde(default)]
    pub granularity: SeriesGranularity,
}

impl ReportParams {
    /// Resolves the report options, using `today` when no anchor was given.
    pub fn options(&self, today: NaiveDate) -> ReportOptions {
        ReportOptions {
            anchor_date: self.anchor_date.unwrap_or(today),
            today,
            series_start: self.series_start,
            series_end: self.series_end,
            granularity: self.granularity,
        }
    }
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// All known travel intervals, in any order.
    pub intervals: Vec<TravelInterval>,
    /// Anchor date and series options.
    #[serde(flatten)]
    pub params: ReportParams,
}
