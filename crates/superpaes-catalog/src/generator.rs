//! On-demand exercise generation.
//!
//! The generation endpoint returns placeholder multiple choice exercises
//! built from the requested subject and difficulty. Subject and difficulty
//! are echoed back exactly as the client sent them, including non-string
//! payloads, so the frontend can round-trip its own labels.

use rand::Rng;
use serde_json::Value;
use superpaes_types::{GeneratedExercise, MULTIPLE_CHOICE};

use crate::ids::random_entity_id;

/// Number of exercises produced when the request does not name a count.
pub const DEFAULT_COUNT: usize = 5;

/// Hard cap on exercises per request.
pub const MAX_COUNT: usize = 100;

/// Subject used when the request does not name one.
pub const DEFAULT_SUBJECT: &str = "Competencia Lectora";

/// Difficulty used when the request does not name one.
pub const DEFAULT_DIFFICULTY: &str = "Intermedio";

/// Shortest estimated solve time in minutes.
const MIN_EXERCISE_MINUTES: u32 = 2;

/// Longest estimated solve time in minutes.
const MAX_EXERCISE_MINUTES: u32 = 5;

/// The option letters; also the full option texts of a generated exercise.
const OPTION_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

/// Builds `count` placeholder exercises for the given subject and difficulty.
///
/// The count is clamped to [`MAX_COUNT`]. Question and explanation texts are
/// numbered from one in generation order.
pub fn generate_exercises(
    rng: &mut impl Rng,
    subject: &Value,
    difficulty: &Value,
    count: usize,
) -> Vec<GeneratedExercise> {
    let subject_label = value_label(subject);
    let difficulty_label = value_label(difficulty);
    let count = count.min(MAX_COUNT);

    (1..=count)
        .map(|ordinal| {
            let idx = rng.random_range(0..OPTION_LETTERS.len());
            let correct = OPTION_LETTERS.get(idx).copied().unwrap_or("A");
            GeneratedExercise {
                id: random_entity_id(rng),
                subject: subject.clone(),
                difficulty: difficulty.clone(),
                kind: String::from(MULTIPLE_CHOICE),
                question: format!(
                    "Pregunta {ordinal} de {subject_label} - Nivel {difficulty_label}"
                ),
                options: OPTION_LETTERS.iter().map(|text| String::from(*text)).collect(),
                correct_answer: String::from(correct),
                explanation: format!(
                    "Explicación detallada de la respuesta correcta para la pregunta {ordinal}"
                ),
                estimated_time: rng.random_range(MIN_EXERCISE_MINUTES..=MAX_EXERCISE_MINUTES),
            }
        })
        .collect()
}

/// Sums the estimated solve time of a generated batch.
#[must_use]
pub fn total_time(exercises: &[GeneratedExercise]) -> u32 {
    exercises
        .iter()
        .fold(0_u32, |acc, exercise| acc.saturating_add(exercise.estimated_time))
}

/// Text form of an echoed request value. Strings keep their content, every
/// other JSON value falls back to its serialized form.
fn value_label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
