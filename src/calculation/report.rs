//! Residency report assembly.
//!
//! Runs every counter in the crate against one set of travel intervals and
//! one policy: the rolling window at the anchor date, the all-time total, each
//! fixed epoch, and a remaining-days series swept across the projection range.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CapStatus, FixedEpochTotal, RemainingPoint, ReportSeries, ResidencyReport, SeriesGranularity,
    TravelInterval, Window,
};

use super::fixed_window::{count_all_time, count_fixed_window};
use super::monthly_max::aggregate_monthly;
use super::remaining::{remaining_for_month, remaining_series};
use super::sweep::{default_sweep_start, sweep};
use super::window_count::count_window;

/// Parameters of one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// The date the rolling and fixed windows end on.
    pub anchor_date: NaiveDate,
    /// The current date, used as the series start when there are no
    /// intervals and no explicit start.
    pub today: NaiveDate,
    /// First day of the series; defaults to the earliest departure, or
    /// `today` when there are no intervals.
    #[serde(default)]
    pub series_start: Option<NaiveDate>,
    /// Last day of the series; defaults to the anchor date plus the policy's
    /// projection horizon.
    #[serde(default)]
    pub series_end: Option<NaiveDate>,
    /// Resolution of the series.
    #[serde(default)]
    pub granularity: SeriesGranularity,
}

impl ReportOptions {
    /// Options for a report run on `anchor_date` itself, with every other
    /// field defaulted.
    pub fn anchored_at(anchor_date: NaiveDate) -> Self {
        Self {
            anchor_date,
            today: anchor_date,
            series_start: None,
            series_end: None,
            granularity: SeriesGranularity::default(),
        }
    }

    /// Resolves the inclusive series range and checks it against the policy.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSeriesRange`] if the range ends before it starts
    /// or covers more than `policy.max_series_days` days.
    pub fn series_range(
        &self,
        intervals: &[TravelInterval],
        policy: &PolicyConfig,
    ) -> EngineResult<(NaiveDate, NaiveDate)> {
        let start = self
            .series_start
            .unwrap_or_else(|| default_sweep_start(intervals, self.today));
        let end = self.series_end.unwrap_or_else(|| {
            self.anchor_date
                .checked_add_days(Days::new(u64::from(policy.projection_days)))
                .unwrap_or(NaiveDate::MAX)
        });

        let invalid = |message: String| EngineError::InvalidSeriesRange {
            start,
            end,
            message,
        };

        if end < start {
            return Err(invalid("series ends before it starts".to_string()));
        }

        let days = (end - start).num_days() + 1;
        if days > i64::from(policy.max_series_days) {
            return Err(invalid(format!(
                "series covers {} days, more than the limit of {}",
                days, policy.max_series_days
            )));
        }

        Ok((start, end))
    }
}

/// Builds a complete residency report.
///
/// The series range is validated before any counting runs.
///
/// # Errors
///
/// [`EngineError::InvalidSeriesRange`] as for [`ReportOptions::series_range`].
///
/// # Example
///
/// ```
/// use residency_engine::calculation::{build_report, ReportOptions};
/// use residency_engine::config::PolicyConfig;
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
/// let anchor = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let report = build_report(&trips, &PolicyConfig::default(), &ReportOptions::anchored_at(anchor))?;
///
/// assert_eq!(report.days_outside.observed, 7);
/// assert_eq!(report.days_outside.remaining, 173);
/// # Ok::<(), residency_engine::error::EngineError>(())
/// ```
pub fn build_report(
    intervals: &[TravelInterval],
    policy: &PolicyConfig,
    options: &ReportOptions,
) -> EngineResult<ResidencyReport> {
    let (series_start, series_end) = options.series_range(intervals, policy)?;
    let anchor = options.anchor_date;
    let rules = &policy.counting;

    let window = Window::rolling(anchor, policy.lookback_days);
    let rolling = count_window(intervals, anchor, policy.lookback_days, rules);

    let fixed_epochs: Vec<FixedEpochTotal> = policy
        .fixed_epochs
        .iter()
        .map(|epoch| {
            let start = epoch.start.window_start(anchor);
            let observed = count_fixed_window(intervals, anchor, start, rules);
            FixedEpochTotal {
                window: Window::fixed(start, anchor),
                status: CapStatus::new(epoch.label.clone(), observed, epoch.cap),
            }
        })
        .collect();

    let daily = sweep(
        intervals,
        series_start,
        series_end,
        policy.lookback_days,
        policy.counting,
    );
    let (start_date, end_date) = (daily.start_date(), daily.end_date());
    let points: Vec<RemainingPoint> = match options.granularity {
        SeriesGranularity::Daily => remaining_series(daily, policy.caps).collect(),
        SeriesGranularity::Monthly => aggregate_monthly(daily)
            .iter()
            .map(|month| remaining_for_month(month, &policy.caps))
            .collect(),
    };

    debug!(
        intervals = intervals.len(),
        anchor = %anchor,
        series_start = %start_date,
        series_end = %end_date,
        points = points.len(),
        "Built residency report"
    );

    Ok(ResidencyReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        window,
        rolling,
        days_outside: CapStatus::new("days_outside", rolling.days_outside, policy.caps.days_outside),
        remote_working_days: CapStatus::new(
            "remote_working_days",
            rolling.remote_working_days,
            policy.caps.remote_working_days,
        ),
        all_time: CapStatus::new(
            "all_time",
            count_all_time(intervals, rules),
            policy.all_time_cap,
        ),
        fixed_epochs,
        series: ReportSeries {
            granularity: options.granularity,
            start_date,
            end_date,
            points,
        },
    })
}
