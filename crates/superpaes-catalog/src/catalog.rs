//! The immutable content catalog shared by all request handlers.

use std::collections::BTreeMap;

use chrono::Utc;
use superpaes_types::{
    DiagnosticQuestion, Exercise, Goal, LearningMetricsReport, Playlist, ScorePrediction,
    StudyAgent, Subject, UserProfile,
};

use crate::exercises::{ExerciseFilter, exercise_bank};
use crate::fixtures;

/// All static demo content, built once at startup and shared read-only.
///
/// The catalog never changes after construction; mutation endpoints echo
/// their input instead of writing here. The profile's `created_at` holds
/// the catalog build time and is re-stamped by the profile endpoint.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    /// Demo student profile.
    pub user: UserProfile,
    /// Demo PAES goals.
    pub goals: Vec<Goal>,
    /// Demo study playlists.
    pub playlists: Vec<Playlist>,
    /// Demo AI study agents.
    pub agents: Vec<StudyAgent>,
    /// Learning metrics with the analytics extensions.
    pub metrics_report: LearningMetricsReport,
    /// Score prediction figures.
    pub prediction: ScorePrediction,
    /// Playlist template names per subject.
    pub playlist_templates: BTreeMap<Subject, Vec<String>>,
    /// The curated exercise bank.
    pub exercises: Vec<Exercise>,
    /// Fixed diagnostic questions.
    pub diagnostic_questions: Vec<DiagnosticQuestion>,
}

impl ContentCatalog {
    /// Assembles the full demo catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: fixtures::demo_user(Utc::now()),
            goals: fixtures::demo_goals(),
            playlists: fixtures::demo_playlists(),
            agents: fixtures::demo_agents(),
            metrics_report: fixtures::demo_metrics_report(),
            prediction: fixtures::demo_prediction(),
            playlist_templates: fixtures::playlist_templates(),
            exercises: exercise_bank(),
            diagnostic_questions: fixtures::diagnostic_questions(),
        }
    }

    /// Exercises passing the filter, in bank order.
    #[must_use]
    pub fn filter_exercises(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .collect()
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
