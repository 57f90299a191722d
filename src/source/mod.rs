//! Travel record sources.
//!
//! Adapters that turn stored travel records into validated
//! [`TravelInterval`](crate::models::TravelInterval) values. Loading is
//! all-or-nothing: the counters never see a partially loaded log.

mod travel_log;

pub use travel_log::{TRAVEL_LOG_DATE_FORMAT, load_travel_log, parse_travel_log};
