use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse risk classification returned by every assessment.
///
/// The multi-symptom assessment uses all three tiers; the single-condition
/// questionnaires are binary and never emit `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

/// Submitted answers for the multi-symptom common-diseases screen.
///
/// `duration` and `severity` are optional at the wire level so the handler
/// can reject their absence with a descriptive message instead of a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
}

/// Heart assessment answers. Absent or unrecognized values score zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartAnswers {
    #[serde(default)]
    pub chest_pain: Option<String>,
    #[serde(default)]
    pub breathing_difficulty: Option<String>,
    #[serde(default)]
    pub fatigue: Option<String>,
    #[serde(default)]
    pub heart_rate: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub exercise_habits: Option<String>,
}

/// Diabetes assessment answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesAnswers {
    #[serde(default)]
    pub excessive_thirst: Option<String>,
    #[serde(default)]
    pub frequent_urination: Option<String>,
    #[serde(default)]
    pub unexplained_weight_loss: Option<String>,
    #[serde(default)]
    pub fatigue: Option<String>,
    #[serde(default)]
    pub blurred_vision: Option<String>,
    #[serde(default)]
    pub slow_healing_wounds: Option<String>,
}

/// Parkinson's assessment answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkinsonsAnswers {
    #[serde(default)]
    pub hand_shaking: Option<String>,
    #[serde(default)]
    pub movement_slowness: Option<String>,
    #[serde(default)]
    pub muscle_stiffness: Option<String>,
    #[serde(default)]
    pub balance_problems: Option<String>,
    #[serde(default)]
    pub voice_changes: Option<String>,
    #[serde(default)]
    pub writing_changes: Option<String>,
}

/// Ranked alternative condition for the multi-symptom assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPrediction {
    pub condition: String,
    pub confidence: u32,
}

/// Full multi-symptom assessment result, built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomPrediction {
    pub condition: String,
    pub risk: RiskTier,
    pub confidence: u32,
    pub risk_score: u32,
    pub factors: SymptomReport,
    pub sub_predictions: Vec<SubPrediction>,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Single-condition assessment result. `factors` echoes the submitted
/// answers so delegated and local responses are structurally identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionPrediction<F> {
    pub risk: RiskTier,
    pub confidence: f64,
    pub risk_score: f64,
    pub factors: F,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
