//! Grading policy behind the submission and diagnostic endpoints.
//!
//! The demo backend does not score answers against the bank. Verdicts come
//! from a [`Grader`] implementation so the handlers stay deterministic under
//! test while production keeps the coin flip behaviour the frontend expects.
//!
//! - [`RandomGrader`] flips a fair coin per submission and samples diagnostic
//!   scores uniformly.
//! - [`ScriptedGrader`] replays fixed verdicts for tests and demos.

use rand::Rng;
use superpaes_types::DifficultyLevel;

use crate::ids::random_entity_id;

/// Points awarded for a correct submission.
pub const CORRECT_SCORE: u32 = 10;

/// Lowest score a diagnostic can produce.
pub const DIAGNOSTIC_SCORE_MIN: u32 = 60;

/// Highest score a diagnostic can produce.
pub const DIAGNOSTIC_SCORE_MAX: u32 = 95;

/// Levels a diagnostic can place a student at. Excelencia is earned through
/// playlists, never assigned by the diagnostic.
const DIAGNOSTIC_LEVELS: [DifficultyLevel; 3] = [
    DifficultyLevel::Basico,
    DifficultyLevel::Intermedio,
    DifficultyLevel::Avanzado,
];

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

/// Outcome of grading one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionVerdict {
    /// Whether the answer was accepted.
    pub correct: bool,
    /// Points awarded for this submission.
    pub score: u32,
    /// Id of a suggested follow-up exercise, present only on success.
    pub next_exercise: Option<String>,
}

/// Outcome of grading a completed diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticVerdict {
    /// Overall diagnostic score.
    pub score: u32,
    /// Level the student is placed at.
    pub level: DifficultyLevel,
}

// ---------------------------------------------------------------------------
// Grader seam
// ---------------------------------------------------------------------------

/// Produces verdicts for submissions and diagnostics.
///
/// Implementations must be safe to share across request handlers.
pub trait Grader: Send + Sync {
    /// Grades one submitted answer for the given exercise.
    fn grade_submission(
        &self,
        exercise_id: &str,
        answer: Option<&serde_json::Value>,
    ) -> SubmissionVerdict;

    /// Grades a completed diagnostic session.
    fn grade_diagnostic(&self, diagnostic_id: &str) -> DiagnosticVerdict;
}

/// Production grader. Flips a fair coin per submission and samples the
/// diagnostic score and level uniformly from the allowed ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGrader;

impl RandomGrader {
    /// Creates a new random grader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Grader for RandomGrader {
    fn grade_submission(
        &self,
        _exercise_id: &str,
        _answer: Option<&serde_json::Value>,
    ) -> SubmissionVerdict {
        let mut rng = rand::rng();
        let correct = rng.random_bool(0.5);
        SubmissionVerdict {
            correct,
            score: if correct { CORRECT_SCORE } else { 0 },
            next_exercise: correct.then(|| random_entity_id(&mut rng)),
        }
    }

    fn grade_diagnostic(&self, _diagnostic_id: &str) -> DiagnosticVerdict {
        let mut rng = rand::rng();
        let idx = rng.random_range(0..DIAGNOSTIC_LEVELS.len());
        DiagnosticVerdict {
            score: rng.random_range(DIAGNOSTIC_SCORE_MIN..=DIAGNOSTIC_SCORE_MAX),
            level: DIAGNOSTIC_LEVELS
                .get(idx)
                .copied()
                .unwrap_or(DifficultyLevel::Intermedio),
        }
    }
}

/// Grader that replays fixed verdicts. Used by tests and demo setups that
/// need a predictable outcome.
#[derive(Debug, Clone)]
pub struct ScriptedGrader {
    submission: SubmissionVerdict,
    diagnostic: DiagnosticVerdict,
}

impl ScriptedGrader {
    /// Creates a grader that always returns the given verdicts.
    #[must_use]
    pub const fn new(submission: SubmissionVerdict, diagnostic: DiagnosticVerdict) -> Self {
        Self {
            submission,
            diagnostic,
        }
    }
}

impl Grader for ScriptedGrader {
    fn grade_submission(
        &self,
        _exercise_id: &str,
        _answer: Option<&serde_json::Value>,
    ) -> SubmissionVerdict {
        self.submission.clone()
    }

    fn grade_diagnostic(&self, _diagnostic_id: &str) -> DiagnosticVerdict {
        self.diagnostic.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn random_submission_verdicts_are_consistent() {
        let grader = RandomGrader::new();
        for _ in 0..64 {
            let verdict = grader.grade_submission("1", None);
            if verdict.correct {
                assert_eq!(verdict.score, CORRECT_SCORE);
                let next = verdict.next_exercise.unwrap();
                assert_eq!(next.len(), 4);
                assert!(next.parse::<u32>().is_ok());
            } else {
                assert_eq!(verdict.score, 0);
                assert!(verdict.next_exercise.is_none());
            }
        }
    }

    #[test]
    fn random_diagnostic_stays_in_range() {
        let grader = RandomGrader::new();
        for _ in 0..64 {
            let verdict = grader.grade_diagnostic("3847");
            assert!((DIAGNOSTIC_SCORE_MIN..=DIAGNOSTIC_SCORE_MAX).contains(&verdict.score));
            assert!(DIAGNOSTIC_LEVELS.contains(&verdict.level));
        }
    }

    #[test]
    fn scripted_grader_replays_verdicts() {
        let grader = ScriptedGrader::new(
            SubmissionVerdict {
                correct: true,
                score: CORRECT_SCORE,
                next_exercise: Some(String::from("4242")),
            },
            DiagnosticVerdict {
                score: 88,
                level: DifficultyLevel::Avanzado,
            },
        );

        let submission = grader.grade_submission("7", None);
        assert!(submission.correct);
        assert_eq!(submission.next_exercise.as_deref(), Some("4242"));

        let diagnostic = grader.grade_diagnostic("1");
        assert_eq!(diagnostic.score, 88);
        assert_eq!(diagnostic.level, DifficultyLevel::Avanzado);
    }
}
