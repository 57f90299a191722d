//! Tabular travel log reader.
//!
//! Reads the comma-separated travel log format: one header row, then one row
//! per trip of `departure,arrival,remote_work_exempt,annual_leave_days` with
//! `DD-MM-YYYY` dates. Any malformed row aborts the whole load.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::TravelInterval;

/// Date format used by the travel log.
pub const TRAVEL_LOG_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a travel log held in memory.
///
/// The first line is a header and is skipped. Blank lines are ignored.
/// Columns after the fourth are ignored. An empty leave column reads as zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRecord`] for the first row that is missing a
/// column, holds an unparseable value, or arrives before it departs.
///
/// # Example
///
/// ```
/// use residency_engine::source::parse_travel_log;
///
/// let log = "departure,arrival,remote_work_exempt,annual_leave_days\n\
///            01-01-2024,10-01-2024,false,0\n";
///
/// let trips = parse_travel_log(log)?;
/// assert_eq!(trips.len(), 1);
/// assert_eq!(trips[0].raw_span_days(), 9);
/// # Ok::<(), residency_engine::error::EngineError>(())
/// ```
pub fn parse_travel_log(content: &str) -> EngineResult<Vec<TravelInterval>> {
    let intervals = content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_record(index + 1, line))
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(records = intervals.len(), "Parsed travel log");

    Ok(intervals)
}

/// Reads and parses a travel log file.
///
/// # Errors
///
/// - [`EngineError::TravelLogNotFound`] if the file cannot be read
/// - [`EngineError::InvalidRecord`] for the first malformed row
pub fn load_travel_log<P: AsRef<Path>>(path: P) -> EngineResult<Vec<TravelInterval>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|_| EngineError::TravelLogNotFound {
        path: path.display().to_string(),
    })?;

    parse_travel_log(&content)
}

/// Parses one row; `line` is the 1-based line number used in errors.
fn parse_record(line: usize, record: &str) -> EngineResult<TravelInterval> {
    let invalid = |message: String| EngineError::InvalidRecord {
        line,
        record: record.to_string(),
        message,
    };

    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(invalid(format!(
            "expected 4 columns, found {}",
            fields.len()
        )));
    }

    let departure = parse_date(fields[0])
        .ok_or_else(|| invalid(format!("invalid departure date '{}'", fields[0])))?;
    let arrival = parse_date(fields[1])
        .ok_or_else(|| invalid(format!("invalid arrival date '{}'", fields[1])))?;
    let remote_work_exempt = parse_flag(fields[2])
        .ok_or_else(|| invalid(format!("invalid remote work exempt flag '{}'", fields[2])))?;
    let annual_leave_days = parse_leave(fields[3])
        .ok_or_else(|| invalid(format!("invalid annual leave days '{}'", fields[3])))?;

    TravelInterval::new(departure, arrival, remote_work_exempt, annual_leave_days)
        .map_err(|e| invalid(e.to_string()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, TRAVEL_LOG_DATE_FORMAT).ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_leave(value: &str) -> Option<u32> {
    if value.is_empty() {
        return Some(0);
    }
    value.parse().ok()
}
