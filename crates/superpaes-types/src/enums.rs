//! Enumeration types for the SuperPAES Chile backend.
//!
//! Wire strings follow the dashboard contract exactly: PAES subjects and
//! difficulty levels serialize as their Spanish display names, Bloom levels
//! as uppercase Spanish verbs, and lifecycle states as the lowercase tokens
//! the frontend switches on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// PAES subjects
// ---------------------------------------------------------------------------

/// One of the five official PAES test subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Subject {
    /// Reading comprehension.
    #[serde(rename = "Competencia Lectora")]
    CompetenciaLectora,
    /// Mathematics, compulsory track (7th grade through 2nd year of
    /// secondary school).
    #[serde(rename = "Matemática M1")]
    MatematicaM1,
    /// Mathematics, elective track (3rd and 4th year of secondary school).
    #[serde(rename = "Matemática M2")]
    MatematicaM2,
    /// Natural sciences (biology, physics, chemistry).
    #[serde(rename = "Ciencias")]
    Ciencias,
    /// History and social sciences.
    #[serde(rename = "Historia y Ciencias Sociales")]
    Historia,
}

impl Subject {
    /// All five subjects in official listing order.
    pub const ALL: [Self; 5] = [
        Self::CompetenciaLectora,
        Self::MatematicaM1,
        Self::MatematicaM2,
        Self::Ciencias,
        Self::Historia,
    ];

    /// The Spanish display name, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompetenciaLectora => "Competencia Lectora",
            Self::MatematicaM1 => "Matemática M1",
            Self::MatematicaM2 => "Matemática M2",
            Self::Ciencias => "Ciencias",
            Self::Historia => "Historia y Ciencias Sociales",
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty scales
// ---------------------------------------------------------------------------

/// Progression level used for playlists, diagnostics, and the student
/// profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DifficultyLevel {
    /// Entry level.
    #[serde(rename = "Básico")]
    Basico,
    /// Intermediate level.
    Intermedio,
    /// Advanced level.
    Avanzado,
    /// Top-score preparation level.
    Excelencia,
}

impl DifficultyLevel {
    /// All four levels from easiest to hardest.
    pub const ALL: [Self; 4] = [
        Self::Basico,
        Self::Intermedio,
        Self::Avanzado,
        Self::Excelencia,
    ];

    /// The Spanish display name, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basico => "Básico",
            Self::Intermedio => "Intermedio",
            Self::Avanzado => "Avanzado",
            Self::Excelencia => "Excelencia",
        }
    }
}

/// Difficulty scale of the curated exercise bank.
///
/// The bank predates the four-step playlist scale and keeps its original
/// three-step scale; the two are deliberately distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ExerciseDifficulty {
    /// Easy.
    #[serde(rename = "Fácil")]
    Facil,
    /// Medium.
    Medio,
    /// Hard.
    #[serde(rename = "Difícil")]
    Dificil,
}

impl ExerciseDifficulty {
    /// The Spanish display name, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facil => "Fácil",
            Self::Medio => "Medio",
            Self::Dificil => "Difícil",
        }
    }
}

// ---------------------------------------------------------------------------
// Bloom taxonomy
// ---------------------------------------------------------------------------

/// Cognitive level of an exercise per Bloom's taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "UPPERCASE")]
pub enum BloomLevel {
    /// Recall facts.
    Recordar,
    /// Explain concepts.
    Comprender,
    /// Apply procedures.
    Aplicar,
    /// Break down and relate.
    Analizar,
    /// Judge and justify.
    Evaluar,
    /// Produce original work.
    Crear,
}

impl BloomLevel {
    /// The uppercase wire token, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recordar => "RECORDAR",
            Self::Comprender => "COMPRENDER",
            Self::Aplicar => "APLICAR",
            Self::Analizar => "ANALIZAR",
            Self::Evaluar => "EVALUAR",
            Self::Crear => "CREAR",
        }
    }
}

// ---------------------------------------------------------------------------
// Lifecycle states
// ---------------------------------------------------------------------------

/// Whether a study goal is progressing as planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    /// On pace to reach the target score.
    OnTrack,
    /// Falling behind the plan.
    Behind,
}

/// Lifecycle state of a study playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum PlaylistStatus {
    /// Currently being worked through.
    Active,
    /// Not yet started.
    Pending,
    /// All exercises finished.
    Completed,
}

/// Activity state of a specialized study agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Working with the student right now.
    Active,
    /// Processing the student's recent progress.
    Analyzing,
    /// Waiting to be activated.
    Idle,
}

/// Category of a student notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A badge or milestone was unlocked.
    Achievement,
    /// A score or streak moved notably.
    Progress,
    /// A pending task needs attention.
    Reminder,
}

/// Category of a scheduled calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum CalendarEventKind {
    /// A single practice exercise.
    Exercise,
    /// A full playlist session.
    Playlist,
}

/// Direction in which a factor pushes the projected PAES score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum FactorTrend {
    /// Improving the projection.
    Positive,
    /// No measurable effect.
    Neutral,
    /// Dragging the projection down.
    Negative,
}
