//! Demo fixture tables behind the read endpoints.
//!
//! Figures and Spanish labels mirror the dashboard's demo dataset. Records
//! with relative timestamps are builders over `now` so every response
//! carries fresh offsets.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use superpaes_types::{
    AgentStatus, CalendarEvent, CalendarEventKind, DiagnosticQuestion, DifficultyLevel,
    FactorTrend, Goal, GoalStatus, LearningMetrics, LearningMetricsReport, MULTIPLE_CHOICE,
    Notification, NotificationKind, Playlist, PlaylistStatus, PredictionFactors, ScorePrediction,
    StudyAgent, Subject, UserProfile, WeeklyHours,
};

/// Estimated diagnostic duration reported on start, in minutes.
pub const DIAGNOSTIC_DURATION_MINUTES: u32 = 30;

/// Strengths reported with every diagnostic result.
pub const DIAGNOSTIC_STRENGTHS: [&str; 2] = ["Comprensión de textos", "Análisis crítico"];

/// Weaknesses reported with every diagnostic result.
pub const DIAGNOSTIC_WEAKNESSES: [&str; 2] = ["Velocidad de lectura", "Inferencias complejas"];

/// Study recommendations reported with every diagnostic result.
pub const DIAGNOSTIC_RECOMMENDATIONS: [&str; 2] = [
    "Practicar ejercicios de velocidad de lectura",
    "Enfocarse en inferencias de nivel avanzado",
];

/// Next steps reported with every diagnostic result.
pub const DIAGNOSTIC_NEXT_STEPS: [&str; 2] = [
    "Completar playlist de nivel intermedio",
    "Realizar ejercicios de práctica diaria",
];

fn strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Demo student profile. `created_at` is stamped by the caller so the
/// profile endpoint can serve a fresh value per request.
#[must_use]
pub fn demo_user(created_at: DateTime<Utc>) -> UserProfile {
    UserProfile {
        id: 1,
        name: String::from("Estudiante SuperPAES"),
        avatar: String::from("🎓"),
        current_level: DifficultyLevel::Avanzado,
        total_points: 2847,
        rank: String::from("#1 en tu región"),
        email: String::from("estudiante@superpaes.cl"),
        created_at,
    }
}

// ---------------------------------------------------------------------------
// Goals, playlists, agents
// ---------------------------------------------------------------------------

fn goal(
    id: &str,
    subject: Subject,
    current_score: u32,
    target_score: u32,
    progress: u32,
    status: GoalStatus,
    next_milestone: &str,
) -> Goal {
    Goal {
        id: String::from(id),
        subject,
        current_score,
        target_score,
        progress,
        status,
        next_milestone: String::from(next_milestone),
    }
}

/// Demo PAES goals, one per subject.
#[must_use]
pub fn demo_goals() -> Vec<Goal> {
    vec![
        goal("1", Subject::CompetenciaLectora, 720, 850, 85, GoalStatus::OnTrack, "800 puntos"),
        goal("2", Subject::MatematicaM1, 680, 800, 75, GoalStatus::Behind, "750 puntos"),
        goal("3", Subject::MatematicaM2, 750, 900, 83, GoalStatus::OnTrack, "850 puntos"),
        goal("4", Subject::Ciencias, 690, 820, 84, GoalStatus::OnTrack, "800 puntos"),
        goal("5", Subject::Historia, 710, 850, 84, GoalStatus::OnTrack, "800 puntos"),
    ]
}

/// Demo study playlists across the four difficulty levels.
#[must_use]
pub fn demo_playlists() -> Vec<Playlist> {
    vec![
        Playlist {
            id: String::from("1"),
            name: String::from("Información Explícita - Nivel Intermedio"),
            subject: Subject::CompetenciaLectora,
            difficulty: DifficultyLevel::Intermedio,
            duration: 45,
            exercise_count: 12,
            completed_count: 8,
            progress: 67,
            status: PlaylistStatus::Active,
        },
        Playlist {
            id: String::from("2"),
            name: String::from("Ecuaciones Primer Grado - Nivel Avanzado"),
            subject: Subject::MatematicaM1,
            difficulty: DifficultyLevel::Avanzado,
            duration: 60,
            exercise_count: 15,
            completed_count: 12,
            progress: 80,
            status: PlaylistStatus::Active,
        },
        Playlist {
            id: String::from("3"),
            name: String::from("Función Cuadrática - Nivel Excelencia"),
            subject: Subject::MatematicaM2,
            difficulty: DifficultyLevel::Excelencia,
            duration: 90,
            exercise_count: 20,
            completed_count: 0,
            progress: 0,
            status: PlaylistStatus::Pending,
        },
        Playlist {
            id: String::from("4"),
            name: String::from("Célula y Organización Biológica - Nivel Básico"),
            subject: Subject::Ciencias,
            difficulty: DifficultyLevel::Basico,
            duration: 30,
            exercise_count: 10,
            completed_count: 10,
            progress: 100,
            status: PlaylistStatus::Completed,
        },
    ]
}

fn agent(
    id: &str,
    name: &str,
    subject: &str,
    status: AgentStatus,
    last_activity: &str,
    performance: u32,
) -> StudyAgent {
    StudyAgent {
        id: String::from(id),
        name: String::from(name),
        subject: String::from(subject),
        status,
        last_activity: String::from(last_activity),
        performance,
    }
}

/// Demo AI study agents with their freeform coverage labels.
#[must_use]
pub fn demo_agents() -> Vec<StudyAgent> {
    vec![
        agent(
            "1",
            "Agente Competencia Lectora",
            "Comprensión oficial PAES",
            AgentStatus::Active,
            "Hace 5 min",
            92,
        ),
        agent(
            "2",
            "Agente Matemática M1",
            "7° a 2° Medio",
            AgentStatus::Analyzing,
            "Analizando progreso",
            88,
        ),
        agent(
            "3",
            "Agente Meta Puntaje",
            "Optimización de puntaje PAES",
            AgentStatus::Active,
            "Hace 2 min",
            95,
        ),
        agent(
            "4",
            "Agente Ciencias",
            "Biología, Física, Química",
            AgentStatus::Idle,
            "Hace 1 hora",
            90,
        ),
        agent(
            "5",
            "Agente Historia",
            "Historia de Chile y Universal",
            AgentStatus::Idle,
            "Hace 2 horas",
            87,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Demo learning metrics with the weekly hours and subject breakdown the
/// analytics endpoint adds on top of the flat figures.
#[must_use]
pub fn demo_metrics_report() -> LearningMetricsReport {
    // The breakdown uses the dashboard's short "Historia" label, not the
    // full subject name.
    let subject_breakdown = BTreeMap::from([
        (String::from("Competencia Lectora"), 35),
        (String::from("Matemática M1"), 25),
        (String::from("Matemática M2"), 20),
        (String::from("Ciencias"), 15),
        (String::from("Historia"), 5),
    ]);

    LearningMetricsReport {
        metrics: LearningMetrics {
            total_study_time: 127,
            exercises_completed: 284,
            accuracy_rate: 87,
            streak_days: 12,
            weekly_progress: 23,
            monthly_progress: 67,
        },
        current_week: WeeklyHours {
            monday: 2.5,
            tuesday: 3.2,
            wednesday: 1.8,
            thursday: 4.1,
            friday: 2.9,
            saturday: 3.5,
            sunday: 1.2,
        },
        subject_breakdown,
    }
}

/// Demo score prediction with its contributing factors.
#[must_use]
pub fn demo_prediction() -> ScorePrediction {
    ScorePrediction {
        current_prediction: 847,
        confidence: 89,
        factors: PredictionFactors {
            study_time: FactorTrend::Positive,
            accuracy: FactorTrend::Positive,
            consistency: FactorTrend::Positive,
            difficulty: FactorTrend::Neutral,
        },
        recommendations: strings([
            "Aumentar tiempo de estudio en Matemática M1",
            "Practicar más ejercicios de nivel avanzado",
            "Mantener consistencia en el estudio diario",
        ]),
    }
}

// ---------------------------------------------------------------------------
// Playlist templates
// ---------------------------------------------------------------------------

/// Ordered template names per subject, keyed in subject declaration order.
#[must_use]
pub fn playlist_templates() -> BTreeMap<Subject, Vec<String>> {
    BTreeMap::from([
        (
            Subject::CompetenciaLectora,
            strings([
                "Información Explícita - Nivel Básico",
                "Información Explícita - Nivel Intermedio",
                "Inferencias Locales - Nivel Básico",
                "Inferencias Locales - Nivel Intermedio",
                "Evaluación de Argumentos - Nivel Avanzado",
            ]),
        ),
        (
            Subject::MatematicaM1,
            strings([
                "Números Enteros - Nivel Básico",
                "Números Enteros - Nivel Intermedio",
                "Ecuaciones Primer Grado - Nivel Básico",
                "Ecuaciones Primer Grado - Nivel Intermedio",
                "Teorema de Pitágoras - Nivel Básico",
            ]),
        ),
        (
            Subject::MatematicaM2,
            strings([
                "Función Cuadrática - Nivel Intermedio",
                "Función Cuadrática - Nivel Avanzado",
                "Vectores en el Plano - Nivel Avanzado",
                "Límites de Funciones - Nivel Excelencia",
            ]),
        ),
        (
            Subject::Ciencias,
            strings([
                "Célula y Organización Biológica - Nivel Básico",
                "Célula y Organización Biológica - Nivel Intermedio",
                "Movimiento Rectilíneo Uniforme - Nivel Básico",
                "Estructura Atómica - Nivel Básico",
            ]),
        ),
        (
            Subject::Historia,
            strings([
                "Chile Prehispánico - Nivel Básico",
                "Conquista y Colonia - Nivel Intermedio",
                "Revolución Industrial - Nivel Intermedio",
            ]),
        ),
    ])
}

// ---------------------------------------------------------------------------
// Diagnostic questions
// ---------------------------------------------------------------------------

/// The two fixed placeholder questions every diagnostic session starts with.
#[must_use]
pub fn diagnostic_questions() -> Vec<DiagnosticQuestion> {
    vec![
        DiagnosticQuestion {
            id: 1,
            text: String::from("Pregunta de diagnóstico 1"),
            kind: String::from(MULTIPLE_CHOICE),
            options: strings(["A", "B", "C", "D"]),
            difficulty: String::from("intermediate"),
        },
        DiagnosticQuestion {
            id: 2,
            text: String::from("Pregunta de diagnóstico 2"),
            kind: String::from(MULTIPLE_CHOICE),
            options: strings(["A", "B", "C", "D"]),
            difficulty: String::from("advanced"),
        },
    ]
}

// ---------------------------------------------------------------------------
// Time-relative fixtures
// ---------------------------------------------------------------------------

/// Demo notifications with timestamps at `now`, two hours back, and four
/// hours back.
#[must_use]
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Achievement,
            title: String::from("¡Nuevo logro desbloqueado!"),
            message: String::from("Has completado 10 ejercicios de Competencia Lectora"),
            timestamp: now,
            read: false,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Progress,
            title: String::from("Progreso destacado"),
            message: String::from("Tu puntaje en Matemática M1 aumentó 15 puntos"),
            timestamp: now.checked_sub_signed(TimeDelta::hours(2)).unwrap_or(now),
            read: false,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Reminder,
            title: String::from("Recordatorio de estudio"),
            message: String::from("Tienes una playlist pendiente de Ciencias"),
            timestamp: now.checked_sub_signed(TimeDelta::hours(4)).unwrap_or(now),
            read: true,
        },
    ]
}

/// Demo calendar events scheduled one and three hours ahead of `now`.
#[must_use]
pub fn calendar_events(now: DateTime<Utc>) -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: 1,
            title: String::from("Ejercicio Competencia Lectora"),
            kind: CalendarEventKind::Exercise,
            start_time: now.checked_add_signed(TimeDelta::hours(1)).unwrap_or(now),
            end_time: now.checked_add_signed(TimeDelta::minutes(90)).unwrap_or(now),
            subject: Subject::CompetenciaLectora,
            difficulty: DifficultyLevel::Intermedio,
        },
        CalendarEvent {
            id: 2,
            title: String::from("Playlist Matemática M1"),
            kind: CalendarEventKind::Playlist,
            start_time: now.checked_add_signed(TimeDelta::hours(3)).unwrap_or(now),
            end_time: now.checked_add_signed(TimeDelta::hours(4)).unwrap_or(now),
            subject: Subject::MatematicaM1,
            difficulty: DifficultyLevel::Avanzado,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
