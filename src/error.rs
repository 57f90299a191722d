//! Error types for the Residency Day-Counting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading travel records,
//! loading policy configuration, or counting days.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Residency Day-Counting Engine.
///
/// Every error is fatal to the computation that raised it: a day-counting
/// system must not silently skip a malformed or inconsistent travel record,
/// since under-counting a trip misstates a compliance figure.
///
/// # Example
///
/// ```
/// use residency_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A travel interval arrives before it departs.
    #[error("Invalid travel interval: arrival date {arrival} is before departure date {departure}")]
    InvalidInterval {
        /// The departure date of the offending interval.
        departure: NaiveDate,
        /// The arrival date of the offending interval.
        arrival: NaiveDate,
    },

    /// A travel record could not be parsed or failed validation.
    #[error("Invalid travel record at line {line} ('{record}'): {message}")]
    InvalidRecord {
        /// The 1-based line number of the record in its source.
        line: usize,
        /// The raw record text as read from the source.
        record: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A report series range is inverted or longer than the policy allows.
    #[error("Invalid series range {start} to {end}: {message}")]
    InvalidSeriesRange {
        /// The first day of the requested series.
        start: NaiveDate,
        /// The last day of the requested series.
        end: NaiveDate,
        /// Why the range was rejected.
        message: String,
    },

    /// The travel log file was not found or could not be read.
    #[error("Travel log not found: {path}")]
    TravelLogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_interval_displays_both_dates() {
        let error = EngineError::InvalidInterval {
            departure: date(2024, 1, 10),
            arrival: date(2024, 1, 1),
        };
        assert_eq!(
            error.to_string(),
            "Invalid travel interval: arrival date 2024-01-01 is before departure date 2024-01-10"
        );
    }

    #[test]
    fn test_invalid_record_displays_line_and_raw_record() {
        let error = EngineError::InvalidRecord {
            line: 3,
            record: "32-01-2024,10-01-2024,false,0".to_string(),
            message: "invalid departure date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid travel record at line 3 ('32-01-2024,10-01-2024,false,0'): invalid departure date"
        );
    }

    #[test]
    fn test_invalid_series_range_displays_bounds() {
        let error = EngineError::InvalidSeriesRange {
            start: date(2024, 2, 1),
            end: date(2024, 1, 1),
            message: "series ends before it starts".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid series range 2024-02-01 to 2024-01-01: series ends before it starts"
        );
    }

    #[test]
    fn test_travel_log_not_found_displays_path() {
        let error = EngineError::TravelLogNotFound {
            path: "travels.csv".to_string(),
        };
        assert_eq!(error.to_string(), "Travel log not found: travels.csv");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_interval() -> EngineResult<()> {
            Err(EngineError::InvalidInterval {
                departure: date(2024, 2, 1),
                arrival: date(2024, 1, 1),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_interval()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
