//! Axum router construction for the SuperPAES API.
//!
//! Assembles every REST route into a single [`Router`] with CORS
//! middleware enabled for cross-origin frontend access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{analytics, exercises, handlers, study, system};

/// Build the complete Axum router for the SuperPAES server.
///
/// The router covers:
/// - `/` and `/api/health` -- service card and liveness probe
/// - `/api/user`, `/api/user/profile` -- profile projection and full profile
/// - `/api/dashboard` -- aggregate frontend view
/// - `/api/subjects`, `/api/difficulties`, `/api/playlist-templates` --
///   catalog listings
/// - `/api/goals` (with the `/api/paes-goals` alias), `/api/playlists`,
///   `/api/agents` -- study management
/// - `/api/exercises`, `/api/diagnostic` -- bank, generation, and grading
/// - `/api/learning-metrics`, `/api/analytics`, `/api/notifications`,
///   `/api/calendar/events` -- analytics and feeds
/// - `/api/system` -- showcase status and activation endpoints
///
/// Unknown paths fall through to the JSON 404 handler. CORS is configured
/// to allow any origin for development. In production this should be
/// restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Service
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        // User
        .route("/api/user", get(handlers::get_user))
        .route(
            "/api/user/profile",
            get(handlers::get_user_profile).put(handlers::update_user_profile),
        )
        // Dashboard and catalog listings
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/subjects", get(handlers::list_subjects))
        .route("/api/difficulties", get(handlers::list_difficulties))
        .route("/api/playlist-templates", get(handlers::list_playlist_templates))
        // Goals
        .route("/api/goals", get(study::list_goals).post(study::create_goal))
        .route("/api/paes-goals", get(study::list_goals))
        .route("/api/goals/{id}", put(study::update_goal))
        // Playlists
        .route(
            "/api/playlists",
            get(study::list_playlists).post(study::create_playlist),
        )
        .route("/api/playlists/{id}/start", post(study::start_playlist))
        .route("/api/playlists/{id}/complete", post(study::complete_playlist))
        // Agents
        .route("/api/agents", get(study::list_agents))
        .route("/api/agents/{id}/activate", post(study::activate_agent))
        // Exercises
        .route("/api/exercises", get(exercises::list_exercises))
        .route("/api/exercises/generate", post(exercises::generate_exercises))
        .route("/api/exercises/{id}/submit", post(exercises::submit_exercise))
        // Diagnostics
        .route("/api/diagnostic/start", post(exercises::start_diagnostic))
        .route("/api/diagnostic/{id}/submit", post(exercises::submit_diagnostic))
        // Analytics and feeds
        .route("/api/learning-metrics", get(analytics::learning_metrics))
        .route(
            "/api/analytics/learning-metrics",
            get(analytics::learning_metrics_report),
        )
        .route("/api/analytics/predictions", get(analytics::predictions))
        .route("/api/notifications", get(analytics::list_notifications))
        .route("/api/calendar/events", get(analytics::list_calendar_events))
        // System showcase
        .route("/api/system/status", get(system::get_system_status))
        .route(
            "/api/system/quantum-scripts",
            get(system::get_quantum_scripts).post(system::activate_quantum_scripts),
        )
        .route("/api/system/alerts", get(system::list_alerts))
        .route("/api/system/optimize-cache", post(system::optimize_cache))
        .route("/api/system/neural-playlist", post(system::create_neural_playlist))
        .route("/api/system/user-progress", post(system::update_user_progress))
        .route("/api/system/diagnostic", post(system::run_system_diagnostic))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
