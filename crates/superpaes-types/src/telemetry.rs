//! Simulated platform telemetry served under `/api/system`.
//!
//! These figures are fixed demo values dressed up as live metrics; only
//! the quantum timestamp is generated per request. Keys are `snake_case`
//! throughout, matching the system console that renders them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// System status sections
// ---------------------------------------------------------------------------

/// State of the simulated quantum learning graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QuantumMetrics {
    /// Learning-graph node count.
    pub nodes: u32,
    /// Bloom taxonomy levels in play.
    pub bloom_levels: u32,
    /// Playlists synchronized with the audio engine.
    pub spotify_sync: u32,
    /// Entangled node pairs.
    pub entanglement: u32,
    /// Coherence figure between 0 and 1.
    pub coherence: f64,
    /// Entropy figure between 0 and 1.
    pub entropy: f64,
    /// When this reading was taken.
    pub timestamp: DateTime<Utc>,
}

/// Usage counters for the tutoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AiMetrics {
    /// Requests handled to date.
    pub requests_processed: u32,
    /// Mean response latency in milliseconds.
    pub average_response_time: u32,
    /// Model accuracy between 0 and 1.
    pub model_accuracy: f64,
    /// Tokens consumed to date.
    pub token_usage: u32,
    /// Context memory entries held.
    pub context_memory: u32,
    /// Emotional adaptation figure between 0 and 1.
    pub emotional_adaptation: f64,
    /// Proactive suggestions issued.
    pub proactive_suggestions: u32,
}

/// Feature-flag style switchboard for the platform subsystems.
///
/// Embedded in both the status payload and the system diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArsenalStatus {
    /// Bloom taxonomy engine.
    pub bloom_system: bool,
    /// Leonardo neural module.
    pub leonardo_neural: bool,
    /// Quantum script runner.
    pub quantum_scripts: bool,
    /// Gamification engine.
    pub gamification: bool,
    /// Backup subsystem.
    pub backup_system: bool,
    /// Cache optimizer.
    pub cache_optimized: bool,
}

/// State of the neural playlist integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SpotifyStatus {
    /// Identifier of the active neural playlist.
    pub playlist_id: String,
    /// Base frequency in hertz.
    pub neural_frequency: u32,
    /// Current learning state token.
    pub learning_state: String,
    /// Adaptation level between 0 and 1.
    pub adaptation_level: f64,
    /// Pattern labels tailored to the student.
    pub personalized_patterns: Vec<String>,
    /// Synchronization state token.
    pub sync_status: String,
}

/// Cache layer figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CacheMetrics {
    /// Cache tier label.
    pub level: String,
    /// Hit rate between 0 and 1.
    pub hit_rate: f64,
    /// Miss rate between 0 and 1.
    pub miss_rate: f64,
    /// Cache size in megabytes.
    pub size_mb: u32,
    /// Eviction policy label.
    pub eviction_policy: String,
    /// Compression ratio between 0 and 1.
    pub compression_ratio: f64,
}

/// Security posture summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SecurityStatus {
    /// Whether the session token validates.
    pub jwt_valid: bool,
    /// Whether row-level security is enforced.
    pub rls_active: bool,
    /// Rate limiter state token.
    pub rate_limit_status: String,
    /// Whether input sanitization is on.
    pub data_sanitization: bool,
    /// Encryption state token.
    pub encryption_status: String,
    /// Audit log entries retained.
    pub audit_logs: u32,
}

/// Host monitoring rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MonitoringStatus {
    /// Overall state token.
    pub status: String,
    /// Per-component state tokens.
    pub components: BTreeMap<String, String>,
    /// One-line console summary.
    pub summary: String,
}

/// Complete platform status served by `GET /api/system/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SystemStatus {
    /// Quantum learning graph.
    pub quantum: QuantumMetrics,
    /// Tutoring model counters.
    pub ai: AiMetrics,
    /// Subsystem switchboard.
    pub arsenal: ArsenalStatus,
    /// Neural playlist integration.
    pub spotify: SpotifyStatus,
    /// Cache layer.
    pub cache: CacheMetrics,
    /// Security posture.
    pub security: SecurityStatus,
    /// Host monitoring rollup.
    pub monitoring: MonitoringStatus,
}

// ---------------------------------------------------------------------------
// Quantum scripts
// ---------------------------------------------------------------------------

/// Performance figures attached to quantum script listings and activations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QuantumScriptMetrics {
    /// Coherence figure between 0 and 1.
    pub quantum_coherence: f64,
    /// Model accuracy between 0 and 1.
    pub ai_accuracy: f64,
    /// Cache efficiency between 0 and 1.
    pub cache_efficiency: f64,
    /// Neural synchronization between 0 and 1.
    pub neural_sync: f64,
}
