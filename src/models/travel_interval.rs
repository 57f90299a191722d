//! Travel interval model.
//!
//! This module defines [`TravelInterval`], one trip abroad, and enforces its
//! only invariant (arrival on or after departure) at every construction path,
//! including deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents one trip outside the home jurisdiction.
///
/// Both dates are whole calendar days. The calendar day of departure and the
/// calendar day of arrival are part of the interval but are not counted as
/// full days outside (see [`crate::calculation::count_window`]).
///
/// # Examples
///
/// ```
/// use residency_engine::models::TravelInterval;
/// use chrono::NaiveDate;
///
/// let trip = TravelInterval::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     false,
///     0,
/// )
/// .unwrap();
/// assert_eq!(trip.raw_span_days(), 9);
///
/// // Arrival before departure is rejected.
/// assert!(TravelInterval::new(
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     false,
///     0,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTravelInterval")]
pub struct TravelInterval {
    departure_date: NaiveDate,
    arrival_date: NaiveDate,
    remote_work_exempt: bool,
    annual_leave_days: u32,
}

/// Unvalidated shadow of [`TravelInterval`] used for deserialization.
#[derive(Debug, Deserialize)]
struct RawTravelInterval {
    departure_date: NaiveDate,
    arrival_date: NaiveDate,
    #[serde(default)]
    remote_work_exempt: bool,
    #[serde(default)]
    annual_leave_days: u32,
}

impl TryFrom<RawTravelInterval> for TravelInterval {
    type Error = EngineError;

    fn try_from(raw: RawTravelInterval) -> EngineResult<Self> {
        Self::new(
            raw.departure_date,
            raw.arrival_date,
            raw.remote_work_exempt,
            raw.annual_leave_days,
        )
    }
}

impl TravelInterval {
    /// Creates a travel interval, rejecting one that arrives before it departs.
    ///
    /// # Arguments
    ///
    /// * `departure_date` - The calendar day the person left
    /// * `arrival_date` - The calendar day the person came back
    /// * `remote_work_exempt` - When true, the trip's days are not remote-working days
    /// * `annual_leave_days` - Leave days subtracted from this trip's remote-working days
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] when `arrival_date < departure_date`.
    pub fn new(
        departure_date: NaiveDate,
        arrival_date: NaiveDate,
        remote_work_exempt: bool,
        annual_leave_days: u32,
    ) -> EngineResult<Self> {
        if arrival_date < departure_date {
            return Err(EngineError::InvalidInterval {
                departure: departure_date,
                arrival: arrival_date,
            });
        }

        Ok(Self {
            departure_date,
            arrival_date,
            remote_work_exempt,
            annual_leave_days,
        })
    }

    /// Returns the calendar day of departure.
    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Returns the calendar day of arrival.
    pub fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    /// Returns true when this trip is excluded from remote-working accumulation.
    pub fn remote_work_exempt(&self) -> bool {
        self.remote_work_exempt
    }

    /// Returns the annual leave days taken during this trip.
    pub fn annual_leave_days(&self) -> u32 {
        self.annual_leave_days
    }

    /// Returns `arrival - departure` in whole days, before any clipping or discount.
    pub fn raw_span_days(&self) -> i64 {
        (self.arrival_date - self.departure_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_valid_interval_is_constructed() {
        let trip =
            TravelInterval::new(make_date("2024-01-01"), make_date("2024-01-10"), true, 2)
                .unwrap();

        assert_eq!(trip.departure_date(), make_date("2024-01-01"));
        assert_eq!(trip.arrival_date(), make_date("2024-01-10"));
        assert!(trip.remote_work_exempt());
        assert_eq!(trip.annual_leave_days(), 2);
        assert_eq!(trip.raw_span_days(), 9);
    }

    #[test]
    fn test_same_day_trip_is_valid() {
        let trip =
            TravelInterval::new(make_date("2024-03-05"), make_date("2024-03-05"), false, 0)
                .unwrap();
        assert_eq!(trip.raw_span_days(), 0);
    }

    #[test]
    fn test_arrival_before_departure_is_rejected() {
        let result =
            TravelInterval::new(make_date("2024-01-10"), make_date("2024-01-09"), false, 0);

        match result {
            Err(EngineError::InvalidInterval { departure, arrival }) => {
                assert_eq!(departure, make_date("2024-01-10"));
                assert_eq!(arrival, make_date("2024-01-09"));
            }
            other => panic!("Expected InvalidInterval error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialization_applies_defaults() {
        let json = r#"{
            "departure_date": "2024-01-01",
            "arrival_date": "2024-01-10"
        }"#;

        let trip: TravelInterval = serde_json::from_str(json).unwrap();
        assert!(!trip.remote_work_exempt());
        assert_eq!(trip.annual_leave_days(), 0);
    }

    #[test]
    fn test_deserialization_validates_ordering() {
        let json = r#"{
            "departure_date": "2024-01-10",
            "arrival_date": "2024-01-01",
            "remote_work_exempt": false,
            "annual_leave_days": 0
        }"#;

        let err = serde_json::from_str::<TravelInterval>(json).unwrap_err();
        assert!(err.to_string().contains("arrival date 2024-01-01"));
    }

    #[test]
    fn test_serialization_round_trips() {
        let trip =
            TravelInterval::new(make_date("2024-06-01"), make_date("2024-06-20"), false, 3)
                .unwrap();

        let json = serde_json::to_string(&trip).unwrap();
        assert!(json.contains("\"departure_date\":\"2024-06-01\""));

        let deserialized: TravelInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(trip, deserialized);
    }
}
