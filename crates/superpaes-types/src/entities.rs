//! Student-facing entities: profile, goals, playlists, agents, notifications,
//! and calendar entries.
//!
//! Field casing mirrors what the dashboard already consumes: these records
//! use `camelCase` keys, except [`Playlist`] whose keys are all single
//! lowercase words.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AgentStatus, CalendarEventKind, DifficultyLevel, GoalStatus, NotificationKind, PlaylistStatus,
    Subject,
};

// ---------------------------------------------------------------------------
// User profile
// ---------------------------------------------------------------------------

/// The demo student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Account identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Emoji avatar shown in the header.
    pub avatar: String,
    /// Overall progression level.
    pub current_level: DifficultyLevel,
    /// Accumulated gamification points.
    pub total_points: u32,
    /// Regional ranking label.
    pub rank: String,
    /// Contact address.
    pub email: String,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// The compact header card served by `GET /api/user` and embedded in
    /// the dashboard payload.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            current_level: self.current_level,
            total_points: self.total_points,
            rank: self.rank.clone(),
        }
    }
}

/// Header-card projection of [`UserProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Display name.
    pub name: String,
    /// Emoji avatar shown in the header.
    pub avatar: String,
    /// Overall progression level.
    pub current_level: DifficultyLevel,
    /// Accumulated gamification points.
    pub total_points: u32,
    /// Regional ranking label.
    pub rank: String,
}

// ---------------------------------------------------------------------------
// PAES goals
// ---------------------------------------------------------------------------

/// A per-subject target score the student is working toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal identifier (decimal string).
    pub id: String,
    /// The PAES subject this goal covers.
    pub subject: Subject,
    /// Most recent practice score.
    pub current_score: u32,
    /// Score the student wants to reach.
    pub target_score: u32,
    /// Completion percentage toward the target.
    pub progress: u32,
    /// Whether the goal is on pace.
    pub status: GoalStatus,
    /// Next intermediate score to celebrate, e.g. `"800 puntos"`.
    pub next_milestone: String,
}

// ---------------------------------------------------------------------------
// Study playlists
// ---------------------------------------------------------------------------

/// A curated sequence of exercises for one subject and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Playlist {
    /// Playlist identifier (decimal string).
    pub id: String,
    /// Template name, e.g. `"Información Explícita - Nivel Intermedio"`.
    pub name: String,
    /// The PAES subject this playlist drills.
    pub subject: Subject,
    /// Playlist difficulty level.
    pub difficulty: DifficultyLevel,
    /// Estimated duration in minutes.
    pub duration: u32,
    /// Total number of exercises in the playlist.
    #[serde(rename = "exercises")]
    pub exercise_count: u32,
    /// Exercises the student has finished.
    #[serde(rename = "completed")]
    pub completed_count: u32,
    /// Completion percentage.
    pub progress: u32,
    /// Lifecycle state.
    pub status: PlaylistStatus,
}

// ---------------------------------------------------------------------------
// Study agents
// ---------------------------------------------------------------------------

/// A specialized tutoring agent shown on the agents panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct StudyAgent {
    /// Agent identifier (decimal string).
    pub id: String,
    /// Display name, e.g. `"Agente Matemática M1"`.
    pub name: String,
    /// Freeform specialty label; not restricted to the PAES subject names.
    pub subject: String,
    /// Current activity state.
    pub status: AgentStatus,
    /// Human-readable recency label, e.g. `"Hace 5 min"`.
    pub last_activity: String,
    /// Effectiveness score out of 100.
    pub performance: u32,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// An inbox entry for the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// Notification identifier (integer, unlike the string entity ids).
    pub id: u32,
    /// Notification category.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the notification was produced.
    pub timestamp: DateTime<Utc>,
    /// Whether the student has opened it.
    pub read: bool,
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// A scheduled study session on the student's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Event identifier (integer, unlike the string entity ids).
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Session category.
    #[serde(rename = "type")]
    pub kind: CalendarEventKind,
    /// Session start.
    pub start_time: DateTime<Utc>,
    /// Session end.
    pub end_time: DateTime<Utc>,
    /// The PAES subject being studied.
    pub subject: Subject,
    /// Session difficulty level.
    pub difficulty: DifficultyLevel,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn goal_uses_camel_case_keys() {
        let goal = Goal {
            id: String::from("1"),
            subject: Subject::CompetenciaLectora,
            current_score: 720,
            target_score: 850,
            progress: 85,
            status: GoalStatus::OnTrack,
            next_milestone: String::from("800 puntos"),
        };
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["currentScore"], 720);
        assert_eq!(json["targetScore"], 850);
        assert_eq!(json["nextMilestone"], "800 puntos");
        assert_eq!(json["status"], "on-track");
        assert_eq!(json["subject"], "Competencia Lectora");
    }

    #[test]
    fn playlist_counts_use_short_wire_names() {
        let playlist = Playlist {
            id: String::from("1"),
            name: String::from("Información Explícita - Nivel Intermedio"),
            subject: Subject::CompetenciaLectora,
            difficulty: DifficultyLevel::Intermedio,
            duration: 45,
            exercise_count: 12,
            completed_count: 8,
            progress: 67,
            status: PlaylistStatus::Active,
        };
        let json = serde_json::to_value(&playlist).unwrap();
        assert_eq!(json["exercises"], 12);
        assert_eq!(json["completed"], 8);
        assert!(json.get("exercise_count").is_none());
    }

    #[test]
    fn notification_kind_serializes_under_type_key() {
        let notification = Notification {
            id: 1,
            kind: NotificationKind::Achievement,
            title: String::from("¡Nuevo logro desbloqueado!"),
            message: String::from("Has completado 10 ejercicios de Competencia Lectora"),
            timestamp: Utc::now(),
            read: false,
        };
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["type"], "achievement");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn summary_projects_header_fields_only() {
        let profile = UserProfile {
            id: 1,
            name: String::from("Estudiante SuperPAES"),
            avatar: String::from("🎓"),
            current_level: DifficultyLevel::Avanzado,
            total_points: 2847,
            rank: String::from("#1 en tu región"),
            email: String::from("estudiante@superpaes.cl"),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(profile.summary()).unwrap();
        assert_eq!(json["currentLevel"], "Avanzado");
        assert_eq!(json["totalPoints"], 2847);
        assert!(json.get("email").is_none());
        assert!(json.get("createdAt").is_none());
    }
}
