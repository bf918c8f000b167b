//! Analytics, notification, and calendar handlers.
//!
//! Metrics and predictions come straight from the catalog; notifications
//! and calendar events are rebuilt per request so their timestamps track
//! the current time.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use superpaes_catalog::fixtures;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/learning-metrics -- flat counters
// ---------------------------------------------------------------------------

/// Serve the flat learning counters without the weekly or per-subject
/// detail.
pub async fn learning_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.metrics_report.metrics.clone())
}

// ---------------------------------------------------------------------------
// GET /api/analytics/learning-metrics -- full report
// ---------------------------------------------------------------------------

/// Serve the full metrics report: the flat counters plus the current-week
/// hours and the per-subject study breakdown.
pub async fn learning_metrics_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.metrics_report.clone())
}

// ---------------------------------------------------------------------------
// GET /api/analytics/predictions -- score prediction
// ---------------------------------------------------------------------------

/// Serve the PAES score prediction with its factor list.
pub async fn predictions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.prediction.clone())
}

// ---------------------------------------------------------------------------
// GET /api/notifications -- notification feed
// ---------------------------------------------------------------------------

/// Serve the demo notification feed. Timestamps are offsets from now, so
/// the feed always reads as recent.
pub async fn list_notifications() -> impl IntoResponse {
    Json(fixtures::notifications(Utc::now()))
}

// ---------------------------------------------------------------------------
// GET /api/calendar/events -- upcoming events
// ---------------------------------------------------------------------------

/// Serve the demo calendar. Events sit a few hours ahead of the request
/// time.
pub async fn list_calendar_events() -> impl IntoResponse {
    Json(fixtures::calendar_events(Utc::now()))
}
