//! Shared type definitions for the SuperPAES Chile backend.
//!
//! This crate is the single source of truth for the wire contract between
//! the backend and the student dashboard. Types defined here flow
//! downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Subjects, difficulty scales, Bloom levels, lifecycle states
//! - [`entities`] -- Profile, goals, playlists, agents, notifications, calendar
//! - [`exercises`] -- Curated bank items, generated exercises, diagnostics
//! - [`analytics`] -- Learning metrics and score predictions
//! - [`telemetry`] -- Simulated platform status under `/api/system`

pub mod analytics;
pub mod entities;
pub mod enums;
pub mod exercises;
pub mod telemetry;

// Re-export all public types at crate root for convenience.
pub use analytics::{
    LearningMetrics, LearningMetricsReport, PredictionFactors, ScorePrediction, WeeklyHours,
};
pub use entities::{
    CalendarEvent, Goal, Notification, Playlist, StudyAgent, UserProfile, UserSummary,
};
pub use enums::{
    AgentStatus, BloomLevel, CalendarEventKind, DifficultyLevel, ExerciseDifficulty, FactorTrend,
    GoalStatus, NotificationKind, PlaylistStatus, Subject,
};
pub use exercises::{Diagnostic, DiagnosticQuestion, Exercise, GeneratedExercise, MULTIPLE_CHOICE};
pub use telemetry::{
    AiMetrics, ArsenalStatus, CacheMetrics, MonitoringStatus, QuantumMetrics,
    QuantumScriptMetrics, SecurityStatus, SpotifyStatus, SystemStatus,
};
