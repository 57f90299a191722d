//! HTTP request handlers for the Residency Day-Counting Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_report, count_window};
use crate::error::EngineError;
use crate::models::{TravelInterval, Window};
use crate::source::parse_travel_log;

use super::request::{ReportParams, ReportRequest, WindowRequest};
use super::response::{ApiError, ApiErrorResponse, WindowResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/window", post(window_handler))
        .route("/report", post(report_handler))
        .route("/report/travel-log", post(travel_log_report_handler))
        .with_state(state)
}

/// Handler for POST /window endpoint.
///
/// Evaluates the travel intervals against one rolling window.
async fn window_handler(
    State(state): State<AppState>,
    payload: Result<Json<WindowRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing window request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let policy = state.policy();
    let lookback_days = request.lookback_days.unwrap_or(policy.lookback_days);
    let rules = request.rules.unwrap_or(policy.counting);

    let result = count_window(
        &request.intervals,
        request.anchor_date,
        lookback_days,
        &rules,
    );

    info!(
        correlation_id = %correlation_id,
        intervals = request.intervals.len(),
        anchor_date = %request.anchor_date,
        lookback_days,
        days_outside = result.days_outside,
        remote_working_days = result.remote_working_days,
        "Window evaluated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(WindowResponse {
            window: Window::rolling(request.anchor_date, lookback_days),
            result,
        }),
    )
        .into_response()
}

/// Handler for POST /report endpoint.
///
/// Builds the full residency report: rolling totals, fixed epochs, and the
/// remaining-days series.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    report_response(correlation_id, &state, &request.intervals, &request.params)
}

/// Handler for POST /report/travel-log endpoint.
///
/// Accepts the tabular travel log as the request body and report parameters
/// in the query string. A single malformed row fails the whole request.
async fn travel_log_report_handler(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
    body: String,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing travel log report request");

    let intervals = match parse_travel_log(&body) {
        Ok(intervals) => intervals,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Travel log rejected"
            );
            return engine_error_response(err);
        }
    };

    report_response(correlation_id, &state, &intervals, &params)
}

/// Builds a report and renders it as a 200 response.
///
/// A series range that is inverted or longer than the policy allows is
/// rejected with a 400 before any counting runs.
fn report_response(
    correlation_id: Uuid,
    state: &AppState,
    intervals: &[TravelInterval],
    params: &ReportParams,
) -> Response {
    let options = params.options(Utc::now().date_naive());

    let start_time = Instant::now();
    let report = match build_report(intervals, state.policy(), &options) {
        Ok(report) => report,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report request rejected"
            );
            return engine_error_response(err);
        }
    };
    let duration = start_time.elapsed();

    for status in [&report.days_outside, &report.remote_working_days, &report.all_time]
        .into_iter()
        .chain(report.fixed_epochs.iter().map(|epoch| &epoch.status))
        .filter(|status| status.is_breached())
    {
        warn!(
            correlation_id = %correlation_id,
            limit = %status.label,
            observed = status.observed,
            cap = status.cap,
            "Limit breached at anchor date"
        );
    }

    info!(
        correlation_id = %correlation_id,
        report_id = %report.report_id,
        intervals = intervals.len(),
        anchor_date = %options.anchor_date,
        points = report.series.points.len(),
        duration_us = duration.as_micros(),
        "Report completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Renders an engine error with the status and code it maps to.
fn engine_error_response(err: EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including interval validation.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("Invalid travel interval") {
                ApiError::invalid_interval(body_text)
            } else if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
