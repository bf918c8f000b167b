//! Exercise and diagnostic handlers.
//!
//! The bank listing filters the fixed fifteen-exercise set; generation
//! builds placeholder batches on demand; submissions are scored by the
//! state's [`Grader`].
//!
//! [`Grader`]: superpaes_catalog::Grader

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::{Value, json};
use superpaes_catalog::fixtures::{
    DIAGNOSTIC_DURATION_MINUTES, DIAGNOSTIC_NEXT_STEPS, DIAGNOSTIC_RECOMMENDATIONS,
    DIAGNOSTIC_STRENGTHS, DIAGNOSTIC_WEAKNESSES,
};
use superpaes_catalog::generator::{self, DEFAULT_COUNT, DEFAULT_DIFFICULTY, DEFAULT_SUBJECT};
use superpaes_catalog::{ExerciseFilter, random_entity_id};
use superpaes_types::Diagnostic;

use crate::handlers::{field_or, payload};
use crate::state::AppState;

/// Fixed explanation returned with every graded submission.
const SUBMISSION_EXPLANATION: &str =
    "Explicación detallada de por qué la respuesta es correcta o incorrecta";

// ---------------------------------------------------------------------------
// GET /api/exercises -- filtered bank listing
// ---------------------------------------------------------------------------

/// List bank exercises matching the query filters. Absent or empty filter
/// values match everything; the count rides along as `total`.
pub async fn list_exercises(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ExerciseFilter>,
) -> impl IntoResponse {
    let selected = state.catalog.filter_exercises(&filter);
    let total = selected.len();
    Json(json!({
        "exercises": selected,
        "total": total,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/exercises/generate -- placeholder batch
// ---------------------------------------------------------------------------

/// Generate a batch of placeholder exercises.
///
/// `subject` and `difficulty` echo back whatever JSON value was submitted;
/// `count` must be a non-negative integer to take effect, any other value
/// falls back to the default batch size.
pub async fn generate_exercises(body: Option<Json<Value>>) -> impl IntoResponse {
    let data = payload(body);
    let subject = field_or(&data, "subject", json!(DEFAULT_SUBJECT));
    let difficulty = field_or(&data, "difficulty", json!(DEFAULT_DIFFICULTY));
    let count = data
        .get("count")
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_COUNT);

    let mut rng = rand::rng();
    let batch = generator::generate_exercises(&mut rng, &subject, &difficulty, count);
    let total_time = generator::total_time(&batch);
    Json(json!({
        "exercises": batch,
        "totalTime": total_time,
        "difficulty": difficulty,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/exercises/{id}/submit -- grade a submission
// ---------------------------------------------------------------------------

/// Grade a submitted answer. The verdict comes from the state's grader;
/// a correct answer earns a follow-up exercise id.
pub async fn submit_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    let data = payload(body);
    let verdict = state.grader.grade_submission(&id, data.get("answer"));
    Json(json!({
        "exerciseId": id,
        "correct": verdict.correct,
        "score": verdict.score,
        "explanation": SUBMISSION_EXPLANATION,
        "nextExercise": verdict.next_exercise,
    }))
}

// ---------------------------------------------------------------------------
// POST /api/diagnostic/start -- open diagnostic session
// ---------------------------------------------------------------------------

/// Open a diagnostic session with the fixed two-question set. The subject
/// echoes the submitted value.
pub async fn start_diagnostic(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    let data = payload(body);
    let mut rng = rand::rng();
    Json(Diagnostic {
        id: random_entity_id(&mut rng),
        subject: field_or(&data, "subject", json!(DEFAULT_SUBJECT)),
        status: String::from("in_progress"),
        questions: state.catalog.diagnostic_questions.clone(),
        estimated_duration: DIAGNOSTIC_DURATION_MINUTES,
        created_at: Utc::now(),
    })
}

// ---------------------------------------------------------------------------
// POST /api/diagnostic/{id}/submit -- close diagnostic session
// ---------------------------------------------------------------------------

/// Close a diagnostic session with a graded result and the fixed feedback
/// lists. Submitted answers are accepted and discarded.
pub async fn submit_diagnostic(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let verdict = state.grader.grade_diagnostic(&id);
    Json(json!({
        "diagnosticId": id,
        "score": verdict.score,
        "level": verdict.level,
        "strengths": DIAGNOSTIC_STRENGTHS,
        "weaknesses": DIAGNOSTIC_WEAKNESSES,
        "recommendations": DIAGNOSTIC_RECOMMENDATIONS,
        "nextSteps": DIAGNOSTIC_NEXT_STEPS,
    }))
}
