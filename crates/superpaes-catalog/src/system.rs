//! Simulated platform telemetry behind the `/api/system` endpoints.
//!
//! Every figure is a fixed demo value. Only the quantum timestamp moves,
//! stamped by the caller so each status response looks freshly sampled.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use superpaes_types::{
    AiMetrics, ArsenalStatus, CacheMetrics, MonitoringStatus, QuantumMetrics,
    QuantumScriptMetrics, SecurityStatus, SpotifyStatus, SystemStatus,
};

/// Names of the activatable quantum scripts, in presentation order.
pub const QUANTUM_SCRIPT_NAMES: [&str; 4] = [
    "ACTIVAR-ARSENAL-COMPLETO",
    "LEONARDO-ANATOMIA-DAVINCI",
    "ORQUESTADOR-LIMPIEZA-CUANTICA",
    "PUENTE-CUANTICO-COCTELERA",
];

/// Performance figures reported for the quantum scripts, both on listing
/// and as activation impact.
pub const SCRIPT_METRICS: QuantumScriptMetrics = QuantumScriptMetrics {
    quantum_coherence: 0.935,
    ai_accuracy: 0.987,
    cache_efficiency: 0.938,
    neural_sync: 0.863,
};

/// Neural playlist carrier frequency in hertz.
pub const NEURAL_FREQUENCY_HZ: u32 = 432;

/// Track list of every generated neural playlist.
pub const NEURAL_TRACKS: [&str; 5] = [
    "Classical Focus - Neural Enhancement",
    "Ambient Learning - Cognitive Boost",
    "Quantum Study - Memory Optimization",
    "Bloom Taxonomy - Level 1-6",
    "Leonardo Neural - Creative Flow",
];

/// Resource summary line shown by the monitoring block.
const MONITORING_SUMMARY: &str =
    "CPU: 45.2% | Mem: 67.8% | Disco: 58.3% | BD: online | Alertas: 0";

/// Arsenal feature flags, all enabled in the demo.
#[must_use]
pub const fn arsenal() -> ArsenalStatus {
    ArsenalStatus {
        bloom_system: true,
        leonardo_neural: true,
        quantum_scripts: true,
        gamification: true,
        backup_system: true,
        cache_optimized: true,
    }
}

/// Full system status snapshot with the quantum block stamped at `now`.
#[must_use]
pub fn system_status(now: DateTime<Utc>) -> SystemStatus {
    let components = BTreeMap::from(
        ["cpu", "memory", "disk", "database", "quantum", "ai"]
            .map(|component| (String::from(component), String::from("online"))),
    );

    SystemStatus {
        quantum: QuantumMetrics {
            nodes: 150,
            bloom_levels: 6,
            spotify_sync: 8,
            entanglement: 67,
            coherence: 0.85,
            entropy: 0.23,
            timestamp: now,
        },
        ai: AiMetrics {
            requests_processed: 1250,
            average_response_time: 1200,
            model_accuracy: 0.94,
            token_usage: 45000,
            context_memory: 850,
            emotional_adaptation: 0.8,
            proactive_suggestions: 45,
        },
        arsenal: arsenal(),
        spotify: SpotifyStatus {
            playlist_id: String::from("superpaes_neural_001"),
            neural_frequency: NEURAL_FREQUENCY_HZ,
            learning_state: String::from("active"),
            adaptation_level: 0.75,
            personalized_patterns: ["classical", "ambient", "focus"]
                .map(String::from)
                .to_vec(),
            sync_status: String::from("active"),
        },
        cache: CacheMetrics {
            level: String::from("L1"),
            hit_rate: 0.92,
            miss_rate: 0.08,
            size_mb: 100,
            eviction_policy: String::from("LRU"),
            compression_ratio: 0.75,
        },
        security: SecurityStatus {
            jwt_valid: true,
            rls_active: true,
            rate_limit_status: String::from("normal"),
            data_sanitization: true,
            encryption_status: String::from("active"),
            audit_logs: 125,
        },
        monitoring: MonitoringStatus {
            status: String::from("healthy"),
            components,
            summary: String::from(MONITORING_SUMMARY),
        },
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
    fn status_nests_every_subsystem() {
        let now = Utc::now();
        let status = system_status(now);
        assert_eq!(status.quantum.timestamp, now);
        assert_eq!(status.quantum.nodes, 150);
        assert_eq!(status.ai.requests_processed, 1250);
        assert_eq!(status.spotify.neural_frequency, NEURAL_FREQUENCY_HZ);
        assert_eq!(status.cache.level, "L1");
        assert_eq!(status.security.audit_logs, 125);
        assert_eq!(status.monitoring.status, "healthy");
    }

    #[test]
    fn monitoring_reports_six_online_components() {
        let status = system_status(Utc::now());
        let components = &status.monitoring.components;
        assert_eq!(components.len(), 6);
        assert!(components.values().all(|state| state == "online"));
        assert_eq!(components.get("database").map(String::as_str), Some("online"));
    }

    #[test]
    fn arsenal_is_fully_enabled() {
        let arsenal = arsenal();
        assert!(
            arsenal.bloom_system
                && arsenal.leonardo_neural
                && arsenal.quantum_scripts
                && arsenal.gamification
                && arsenal.backup_system
                && arsenal.cache_optimized
        );
    }

    #[test]
    fn script_names_match_metrics_block() {
        assert_eq!(QUANTUM_SCRIPT_NAMES.len(), 4);
        assert!(SCRIPT_METRICS.quantum_coherence > 0.9);
        assert!(SCRIPT_METRICS.neural_sync > 0.8);
        assert_eq!(NEURAL_TRACKS.len(), 5);
    }
}
