//! Study-management handlers: PAES goals, playlists, and AI agents.
//!
//! Listings come from the catalog. Creation and update endpoints are
//! stateless echoes: submitted values round-trip unchanged (whatever their
//! JSON type), server-assigned fields are filled in, and nothing persists.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::{Value, json};
use superpaes_catalog::random_entity_id;

use crate::error::ApiError;
use crate::handlers::{field_or, payload};
use crate::state::AppState;

/// Required goal-creation fields, checked in declaration order.
const GOAL_REQUIRED_FIELDS: [&str; 2] = ["subject", "targetScore"];

/// Points added to the current score for the first milestone of a new goal.
const MILESTONE_STEP: i64 = 50;

// ---------------------------------------------------------------------------
// GET /api/goals, /api/paes-goals -- list goals
// ---------------------------------------------------------------------------

/// List the demo PAES goals. Served under both the legacy and the current
/// path.
pub async fn list_goals(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.goals.clone())
}

// ---------------------------------------------------------------------------
// POST /api/goals -- create goal (echo)
// ---------------------------------------------------------------------------

/// Create a goal from the submitted payload.
///
/// `subject` and `targetScore` are required, checked in that order; the
/// first absent key fails the request. Submitted values echo back without
/// type validation. The milestone adds 50 points to the numeric current
/// score, treating a non-numeric value as zero.
pub async fn create_goal(body: Option<Json<Value>>) -> Result<impl IntoResponse, ApiError> {
    let data = payload(body);
    for field in GOAL_REQUIRED_FIELDS {
        if data.get(field).is_none() {
            return Err(ApiError::MissingField(String::from(field)));
        }
    }

    let current_score = field_or(&data, "currentScore", json!(0));
    let milestone = current_score
        .as_i64()
        .unwrap_or(0)
        .saturating_add(MILESTONE_STEP);

    let mut rng = rand::rng();
    let goal = json!({
        "id": random_entity_id(&mut rng),
        "subject": data.get("subject"),
        "currentScore": current_score,
        "targetScore": data.get("targetScore"),
        "progress": 0,
        "status": "on-track",
        "nextMilestone": format!("{milestone} puntos"),
    });

    Ok((StatusCode::CREATED, Json(goal)))
}

// ---------------------------------------------------------------------------
// PUT /api/goals/{id} -- acknowledge goal update
// ---------------------------------------------------------------------------

/// Accept and discard a goal update.
pub async fn update_goal(_body: Option<Json<Value>>) -> impl IntoResponse {
    Json(json!({ "message": "Meta actualizada correctamente" }))
}

// ---------------------------------------------------------------------------
// GET /api/playlists -- list playlists
// ---------------------------------------------------------------------------

/// List the demo study playlists.
pub async fn list_playlists(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.playlists.clone())
}

// ---------------------------------------------------------------------------
// POST /api/playlists -- create playlist (echo)
// ---------------------------------------------------------------------------

/// Create a playlist from the submitted payload. Every field is optional;
/// absent fields take the demo defaults and the playlist starts pending
/// with no progress.
pub async fn create_playlist(body: Option<Json<Value>>) -> impl IntoResponse {
    let data = payload(body);
    let mut rng = rand::rng();
    let playlist = json!({
        "id": random_entity_id(&mut rng),
        "name": field_or(&data, "name", json!("Nueva Playlist")),
        "subject": field_or(&data, "subject", json!("Competencia Lectora")),
        "difficulty": field_or(&data, "difficulty", json!("Básico")),
        "duration": field_or(&data, "duration", json!(30)),
        "exercises": field_or(&data, "exercises", json!(10)),
        "completed": 0,
        "progress": 0,
        "status": "pending",
    });

    (StatusCode::CREATED, Json(playlist))
}

// ---------------------------------------------------------------------------
// POST /api/playlists/{id}/start -- start playlist
// ---------------------------------------------------------------------------

/// Acknowledge a playlist start with a fresh timestamp.
pub async fn start_playlist(Path(id): Path<String>) -> impl IntoResponse {
    Json(json!({
        "playlistId": id,
        "status": "active",
        "startedAt": Utc::now(),
        "message": "Playlist iniciada correctamente",
    }))
}

// ---------------------------------------------------------------------------
// POST /api/playlists/{id}/complete -- complete playlist
// ---------------------------------------------------------------------------

/// Acknowledge a playlist completion. The final figures echo the submitted
/// body; absent fields take the demo defaults. The submitted `score` key
/// comes back as `finalScore`.
pub async fn complete_playlist(
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    let data = payload(body);
    Json(json!({
        "playlistId": id,
        "status": "completed",
        "completedAt": Utc::now(),
        "finalScore": field_or(&data, "score", json!(85)),
        "timeSpent": field_or(&data, "timeSpent", json!(45)),
        "exercisesCompleted": field_or(&data, "exercisesCompleted", json!(12)),
        "accuracy": field_or(&data, "accuracy", json!(87)),
        "message": "¡Playlist completada exitosamente!",
    }))
}

// ---------------------------------------------------------------------------
// GET /api/agents -- list agents
// ---------------------------------------------------------------------------

/// List the demo AI study agents.
pub async fn list_agents(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.agents.clone())
}

// ---------------------------------------------------------------------------
// POST /api/agents/{id}/activate -- activate agent
// ---------------------------------------------------------------------------

/// Acknowledge an agent activation, naming the agent in the message.
pub async fn activate_agent(Path(id): Path<String>) -> impl IntoResponse {
    Json(json!({ "message": format!("Agente {id} activado correctamente") }))
}
