//! Learning metrics and score prediction types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::FactorTrend;

// ---------------------------------------------------------------------------
// Learning metrics
// ---------------------------------------------------------------------------

/// Headline study metrics shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct LearningMetrics {
    /// Hours studied in total.
    pub total_study_time: u32,
    /// Exercises finished in total.
    pub exercises_completed: u32,
    /// Overall accuracy percentage.
    pub accuracy_rate: u32,
    /// Consecutive study days.
    pub streak_days: u32,
    /// Progress percentage gained this week.
    pub weekly_progress: u32,
    /// Progress percentage gained this month.
    pub monthly_progress: u32,
}

/// Hours studied per weekday of the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WeeklyHours {
    /// Monday hours.
    pub monday: f64,
    /// Tuesday hours.
    pub tuesday: f64,
    /// Wednesday hours.
    pub wednesday: f64,
    /// Thursday hours.
    pub thursday: f64,
    /// Friday hours.
    pub friday: f64,
    /// Saturday hours.
    pub saturday: f64,
    /// Sunday hours.
    pub sunday: f64,
}

/// Extended metrics report served by `GET /api/analytics/learning-metrics`.
///
/// Flattens the headline metrics and adds the weekly histogram and the
/// per-subject time split. The breakdown keys are display labels, not
/// [`Subject`](crate::enums::Subject) tokens; history appears under the
/// short label `"Historia"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct LearningMetricsReport {
    /// Headline metrics, flattened into the report object.
    #[serde(flatten)]
    pub metrics: LearningMetrics,
    /// Hours per weekday.
    pub current_week: WeeklyHours,
    /// Percentage of study time per subject label.
    pub subject_breakdown: BTreeMap<String, u32>,
}

// ---------------------------------------------------------------------------
// Score prediction
// ---------------------------------------------------------------------------

/// Direction of each input to the score projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct PredictionFactors {
    /// Effect of accumulated study time.
    pub study_time: FactorTrend,
    /// Effect of answer accuracy.
    pub accuracy: FactorTrend,
    /// Effect of study consistency.
    pub consistency: FactorTrend,
    /// Effect of the difficulty mix attempted.
    pub difficulty: FactorTrend,
}

/// Projected PAES score served by `GET /api/analytics/predictions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ScorePrediction {
    /// Projected score.
    pub current_prediction: u32,
    /// Confidence percentage.
    pub confidence: u32,
    /// Per-input trend directions.
    pub factors: PredictionFactors,
    /// Suggested next steps.
    pub recommendations: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn report_flattens_headline_metrics() {
        let report = LearningMetricsReport {
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
            subject_breakdown: BTreeMap::from([
                (String::from("Competencia Lectora"), 35),
                (String::from("Historia"), 5),
            ]),
        };
        let json = serde_json::to_value(&report).unwrap();
        // Flattened: the headline fields sit at the top level.
        assert_eq!(json["totalStudyTime"], 127);
        assert!(json.get("metrics").is_none());
        assert_eq!(json["currentWeek"]["thursday"], 4.1);
        assert_eq!(json["subjectBreakdown"]["Historia"], 5);
    }

    #[test]
    fn prediction_factors_use_camel_case_keys() {
        let factors = PredictionFactors {
            study_time: FactorTrend::Positive,
            accuracy: FactorTrend::Positive,
            consistency: FactorTrend::Positive,
            difficulty: FactorTrend::Neutral,
        };
        let json = serde_json::to_value(factors).unwrap();
        assert_eq!(json["studyTime"], "positive");
        assert_eq!(json["difficulty"], "neutral");
    }
}
