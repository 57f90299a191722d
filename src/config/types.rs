//! Configuration types for residency day counting.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. Every legal constant (caps,
//! lookback lengths, fixed epochs) lives here so the counting algorithm stays
//! policy-agnostic.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// How remote-working days treat the departure and arrival days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteDayRule {
    /// Remote days are the clipped span without the 2-day boundary discount.
    #[default]
    BoundaryDaysIncluded,
    /// Remote days use the same discounted overlap as days outside.
    BoundaryDaysDiscounted,
}

/// How a trip whose discounted contribution is negative is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeContributionRule {
    /// Negative contributions are summed as-is and offset other trips.
    #[default]
    Allow,
    /// Each trip contributes at least zero to each total.
    ClampToZero,
}

/// The day-counting rules applied to every interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountingRules {
    /// Boundary-day treatment for remote-working days.
    #[serde(default)]
    pub remote_days: RemoteDayRule,
    /// Treatment of negative per-trip contributions.
    #[serde(default)]
    pub negative_contributions: NegativeContributionRule,
}

/// Caps applied to the rolling window totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollingCaps {
    /// Maximum days outside within one rolling window.
    pub days_outside: i64,
    /// Maximum remote-working days within one rolling window.
    pub remote_working_days: i64,
}

impl Default for RollingCaps {
    fn default() -> Self {
        Self {
            days_outside: 180,
            remote_working_days: 90,
        }
    }
}

/// Where a fixed epoch's window starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpochStart {
    /// A constant calendar date.
    Date {
        /// The first day of the window.
        date: NaiveDate,
    },
    /// A long lookback measured back from the anchor date.
    Lookback {
        /// Days between the window start and the anchor date.
        lookback_days: u32,
    },
}

impl EpochStart {
    /// Resolves the window start for a given anchor date.
    pub fn window_start(&self, anchor: NaiveDate) -> NaiveDate {
        match self {
            EpochStart::Date { date } => *date,
            EpochStart::Lookback { lookback_days } => anchor
                .checked_sub_days(Days::new(u64::from(*lookback_days)))
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

/// A cumulative limit measured since a fixed window start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEpochConfig {
    /// Name of the limit (e.g., "five_year").
    pub label: String,
    /// Where the window starts.
    pub start: EpochStart,
    /// Maximum days outside since the start.
    pub cap: i64,
}

/// The complete residency policy.
///
/// # Example
///
/// ```
/// use residency_engine::config::PolicyConfig;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.lookback_days, 365);
/// assert_eq!(policy.caps.days_outside, 180);
/// assert_eq!(policy.caps.remote_working_days, 90);
/// assert_eq!(policy.all_time_cap, 450);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Human-readable policy name.
    pub name: String,
    /// Length of the rolling window in days.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// Caps on the rolling window totals.
    #[serde(default)]
    pub caps: RollingCaps,
    /// Cap on the sum of every recorded trip.
    #[serde(default = "default_all_time_cap")]
    pub all_time_cap: i64,
    /// How far past the anchor date the series is projected by default.
    #[serde(default = "default_projection_days")]
    pub projection_days: u32,
    /// Longest series, in days, a single report may sweep.
    #[serde(default = "default_max_series_days")]
    pub max_series_days: u32,
    /// Day-counting rules.
    #[serde(default)]
    pub counting: CountingRules,
    /// Cumulative limits measured since fixed window starts.
    #[serde(default)]
    pub fixed_epochs: Vec<FixedEpochConfig>,
}

fn default_lookback_days() -> u32 {
    365
}

fn default_all_time_cap() -> i64 {
    450
}

fn default_projection_days() -> u32 {
    180
}

fn default_max_series_days() -> u32 {
    3660
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            name: "UK settlement".to_string(),
            lookback_days: default_lookback_days(),
            caps: RollingCaps::default(),
            all_time_cap: default_all_time_cap(),
            projection_days: default_projection_days(),
            max_series_days: default_max_series_days(),
            counting: CountingRules::default(),
            fixed_epochs: vec![FixedEpochConfig {
                label: "five_year".to_string(),
                start: EpochStart::Lookback {
                    lookback_days: 1825,
                },
                cap: 450,
            }],
        }
    }
}
