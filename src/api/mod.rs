//! HTTP API module for the Residency Day-Counting Engine.
//!
//! This module provides the REST API endpoints for evaluating a single
//! rolling window and for building a full residency report, either from JSON
//! travel intervals or from a raw travel log.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReportParams, ReportRequest, WindowRequest};
pub use response::{ApiError, ApiErrorResponse, WindowResponse};
pub use state::AppState;
