//! Static demo content and grading policy for the SuperPAES Chile backend.
//!
//! The platform serves a fixed demo dataset; this crate owns all of it plus
//! the two places randomness enters the system:
//!
//! - [`catalog`] -- the immutable [`ContentCatalog`] shared by handlers.
//! - [`fixtures`] -- demo users, goals, playlists, agents, analytics, and
//!   the time-relative notification and calendar builders.
//! - [`exercises`] -- the curated PAES exercise bank and its query filter.
//! - [`generator`] -- synthetic multiple choice exercise generation.
//! - [`grading`] -- the [`Grader`] seam with random and scripted policies.
//! - [`ids`] -- four digit entity id minting.
//! - [`system`] -- fixed telemetry served by the system endpoints.

pub mod catalog;
pub mod exercises;
pub mod fixtures;
pub mod generator;
pub mod grading;
pub mod ids;
pub mod system;

pub use catalog::ContentCatalog;
pub use exercises::{ExerciseFilter, exercise_bank};
pub use generator::{
    DEFAULT_COUNT, DEFAULT_DIFFICULTY, DEFAULT_SUBJECT, MAX_COUNT, generate_exercises, total_time,
};
pub use grading::{
    CORRECT_SCORE, DiagnosticVerdict, Grader, RandomGrader, ScriptedGrader, SubmissionVerdict,
};
pub use ids::random_entity_id;
