//! Exercise and diagnostic types.
//!
//! Two casing conventions coexist here on purpose. The curated bank
//! ([`Exercise`]) keeps the `snake_case` keys it has always had, while the
//! synthetic generator output ([`GeneratedExercise`]) and diagnostics use
//! `camelCase` like the rest of the API. Clients depend on both shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BloomLevel, ExerciseDifficulty, Subject};

/// Wire token for multiple-choice items.
pub const MULTIPLE_CHOICE: &str = "multiple_choice";

// ---------------------------------------------------------------------------
// Curated exercise bank
// ---------------------------------------------------------------------------

/// A curated PAES exercise from the official-content bank.
///
/// Context fields that do not apply to an item are serialized as explicit
/// nulls rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Exercise {
    /// Exercise identifier (decimal string).
    pub id: String,
    /// The PAES subject.
    pub subject: Subject,
    /// Curriculum topic, e.g. `"Ecuaciones de primer grado"`.
    pub topic: String,
    /// The question stem.
    pub question: String,
    /// The four answer options.
    pub options: Vec<String>,
    /// The full text of the correct option.
    pub correct_answer: String,
    /// Worked explanation of the answer.
    pub explanation: String,
    /// Bank difficulty (three-step scale).
    pub difficulty: ExerciseDifficulty,
    /// Bloom taxonomy level.
    pub bloom_level: BloomLevel,
    /// Whether the item is currently served.
    pub is_active: bool,
    /// Reading passage the question refers to, if any.
    pub context_text: Option<String>,
    /// Supporting image reference, if any.
    pub context_image: Option<String>,
    /// Formula given with the stem, if any.
    pub context_formula: Option<String>,
    /// Formula form of the explanation, if any.
    pub explanation_formula: Option<String>,
    /// Points awarded for a correct answer.
    pub points: u32,
    /// Free-form classification tags.
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Synthetic exercises
// ---------------------------------------------------------------------------

/// A placeholder exercise produced by `POST /api/exercises/generate`.
///
/// `subject` and `difficulty` echo whatever JSON values the caller
/// submitted; the endpoint performs no type validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct GeneratedExercise {
    /// Freshly generated identifier (decimal string).
    pub id: String,
    /// Echo of the requested subject.
    pub subject: serde_json::Value,
    /// Echo of the requested difficulty.
    pub difficulty: serde_json::Value,
    /// Always [`MULTIPLE_CHOICE`].
    #[serde(rename = "type")]
    pub kind: String,
    /// Numbered placeholder stem.
    pub question: String,
    /// The literal options `A` through `D`.
    pub options: Vec<String>,
    /// Randomly chosen correct option letter.
    pub correct_answer: String,
    /// Numbered placeholder explanation.
    pub explanation: String,
    /// Estimated minutes to solve (2 to 5).
    pub estimated_time: u32,
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// One question inside a diagnostic session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DiagnosticQuestion {
    /// Position within the session (integer).
    pub id: u32,
    /// Question text.
    pub text: String,
    /// Always [`MULTIPLE_CHOICE`].
    #[serde(rename = "type")]
    pub kind: String,
    /// The four answer options.
    pub options: Vec<String>,
    /// English difficulty token (`"intermediate"` or `"advanced"`);
    /// this legacy field never adopted the Spanish scale.
    pub difficulty: String,
}

/// A diagnostic session returned by `POST /api/diagnostic/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Session identifier (decimal string).
    pub id: String,
    /// Echo of the requested subject.
    pub subject: serde_json::Value,
    /// Always `"in_progress"` on creation.
    pub status: String,
    /// The fixed question set.
    pub questions: Vec<DiagnosticQuestion>,
    /// Estimated minutes to complete.
    pub estimated_duration: u32,
    /// Session creation time.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bank_exercise_keeps_snake_case_keys() {
        let exercise = Exercise {
            id: String::from("1"),
            subject: Subject::MatematicaM1,
            topic: String::from("Ecuaciones de primer grado"),
            question: String::from("Resuelve la ecuación: 2x + 5 = 13"),
            options: vec![
                String::from("x = 4"),
                String::from("x = 8"),
                String::from("x = 6"),
                String::from("x = 3"),
            ],
            correct_answer: String::from("x = 4"),
            explanation: String::from("2x + 5 = 13 → 2x = 8 → x = 4"),
            difficulty: ExerciseDifficulty::Medio,
            bloom_level: BloomLevel::Aplicar,
            is_active: true,
            context_text: None,
            context_image: None,
            context_formula: Some(String::from("2x + 5 = 13")),
            explanation_formula: Some(String::from("x = 4")),
            points: 10,
            tags: vec![String::from("ecuaciones")],
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["correct_answer"], "x = 4");
        assert_eq!(json["bloom_level"], "APLICAR");
        assert_eq!(json["is_active"], true);
        // Absent context fields are explicit nulls, not omitted keys.
        assert!(json["context_text"].is_null());
        assert!(json["context_image"].is_null());
        assert_eq!(json["context_formula"], "2x + 5 = 13");
    }

    #[test]
    fn generated_exercise_uses_camel_case_and_type_key() {
        let exercise = GeneratedExercise {
            id: String::from("4821"),
            subject: serde_json::Value::String(String::from("Ciencias")),
            difficulty: serde_json::Value::String(String::from("Intermedio")),
            kind: String::from(MULTIPLE_CHOICE),
            question: String::from("Pregunta 1 de Ciencias - Nivel Intermedio"),
            options: vec![
                String::from("A"),
                String::from("B"),
                String::from("C"),
                String::from("D"),
            ],
            correct_answer: String::from("B"),
            explanation: String::from(
                "Explicación detallada de la respuesta correcta para la pregunta 1",
            ),
            estimated_time: 3,
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["type"], "multiple_choice");
        assert_eq!(json["correctAnswer"], "B");
        assert_eq!(json["estimatedTime"], 3);
        assert!(json.get("estimated_time").is_none());
    }

    #[test]
    fn diagnostic_echoes_non_string_subject() {
        let diagnostic = Diagnostic {
            id: String::from("1234"),
            subject: serde_json::json!(42),
            status: String::from("in_progress"),
            questions: Vec::new(),
            estimated_duration: 30,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["subject"], 42);
        assert_eq!(json["estimatedDuration"], 30);
    }
}
