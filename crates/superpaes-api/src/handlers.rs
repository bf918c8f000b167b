//! Core endpoint handlers: service index, health, user profile, the
//! dashboard composite, and the utility catalog listings.
//!
//! All reads come from the immutable [`ContentCatalog`] via the shared
//! [`AppState`]; the profile update is a stateless acknowledgement.
//!
//! [`ContentCatalog`]: superpaes_catalog::ContentCatalog

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::{Value, json};
use superpaes_types::{DifficultyLevel, Subject, UserProfile};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- service index
// ---------------------------------------------------------------------------

/// Serve the JSON service card shown at the root path.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "SuperPAES Chile API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "description": "API para el sistema educativo SuperPAES Chile",
    }))
}

// ---------------------------------------------------------------------------
// GET /api/health -- liveness probe
// ---------------------------------------------------------------------------

/// Report service health with a fresh timestamp on every call.
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "message": "SuperPAES Chile Backend funcionando correctamente",
    }))
}

// ---------------------------------------------------------------------------
// GET /api/user -- profile header projection
// ---------------------------------------------------------------------------

/// Serve the five-field profile projection used by the dashboard header.
pub async fn get_user(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.user.summary())
}

// ---------------------------------------------------------------------------
// GET /api/user/profile -- full profile
// ---------------------------------------------------------------------------

/// Serve the full profile. `createdAt` is re-stamped per request to match
/// the original service's behavior.
pub async fn get_user_profile(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let profile = UserProfile {
        created_at: Utc::now(),
        ..state.catalog.user.clone()
    };
    Json(profile)
}

// ---------------------------------------------------------------------------
// PUT /api/user/profile -- acknowledge profile update
// ---------------------------------------------------------------------------

/// Accept and discard a profile update. Nothing persists; the handler only
/// acknowledges.
pub async fn update_user_profile(_body: Option<Json<Value>>) -> impl IntoResponse {
    Json(json!({ "message": "Perfil actualizado correctamente" }))
}

// ---------------------------------------------------------------------------
// GET /api/dashboard -- aggregate view
// ---------------------------------------------------------------------------

/// Serve the dashboard composite: profile header, goals, playlists, agents,
/// and the flat learning metrics.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let catalog = &state.catalog;
    Json(json!({
        "user": catalog.user.summary(),
        "goals": catalog.goals,
        "playlists": catalog.playlists,
        "agents": catalog.agents,
        "metrics": catalog.metrics_report.metrics,
    }))
}

// ---------------------------------------------------------------------------
// Utility listings
// ---------------------------------------------------------------------------

/// List the five PAES subject labels.
pub async fn list_subjects() -> impl IntoResponse {
    Json(Subject::ALL.map(|subject| subject.as_str()))
}

/// List the four playlist difficulty labels.
pub async fn list_difficulties() -> impl IntoResponse {
    Json(DifficultyLevel::ALL.map(|level| level.as_str()))
}

/// Serve the playlist template names grouped by subject.
pub async fn list_playlist_templates(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.playlist_templates.clone())
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Request body as a JSON value. An absent body reads as an empty object,
/// so every field lookup falls through to its default.
pub(crate) fn payload(body: Option<Json<Value>>) -> Value {
    body.map_or_else(|| json!({}), |Json(value)| value)
}

/// Look up `key` in an echo payload, falling back to `default` when absent.
pub(crate) fn field_or(data: &Value, key: &str, default: Value) -> Value {
    data.get(key).cloned().unwrap_or(default)
}
