//! Shared application state for the API server.
//!
//! [`AppState`] bundles the immutable [`ContentCatalog`] with the grading
//! policy. Both are behind [`Arc`] so handlers share them without locking;
//! nothing in the state ever mutates after startup.

use std::sync::Arc;

use superpaes_catalog::{ContentCatalog, Grader, RandomGrader};

/// Shared state injected into every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Static demo content served by the read endpoints.
    pub catalog: Arc<ContentCatalog>,
    /// Verdict policy for submissions and diagnostics.
    pub grader: Arc<dyn Grader>,
}

impl AppState {
    /// Creates the production state: full catalog, random grading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(ContentCatalog::new()),
            grader: Arc::new(RandomGrader::new()),
        }
    }

    /// Creates a state with a caller-supplied grading policy. Used by tests
    /// that need deterministic verdicts.
    #[must_use]
    pub fn with_grader(grader: Arc<dyn Grader>) -> Self {
        Self {
            catalog: Arc::new(ContentCatalog::new()),
            grader,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
