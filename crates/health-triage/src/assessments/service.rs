use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::delegate::{DelegateGateway, HttpDelegate};
use super::domain::{
    ConditionPrediction, DiabetesAnswers, HeartAnswers, ParkinsonsAnswers, RiskTier,
    SymptomPrediction, SymptomReport,
};
use super::engine::questionnaire::{self, QuestionnaireOutcome};
use super::engine::symptoms;
use super::recommendations;

/// Facade composing validation, delegate-first prediction, and local
/// scoring. Stateless across requests; the only collaborator is the
/// optional delegate gateway.
pub struct AssessmentService<D> {
    delegate: Option<Arc<D>>,
}

/// Rejections surfaced to callers as 400 responses.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Symptoms array is required and cannot be empty")]
    MissingSymptoms,
    #[error("Duration and severity are required")]
    MissingDurationOrSeverity,
    #[error("At least one answer is required")]
    EmptyQuestionnaire,
}

impl AssessmentService<HttpDelegate> {
    /// Service that always scores locally.
    pub fn local() -> Self {
        Self { delegate: None }
    }
}

impl<D> AssessmentService<D>
where
    D: DelegateGateway + 'static,
{
    pub fn new(delegate: Option<Arc<D>>) -> Self {
        Self { delegate }
    }

    /// Score the multi-symptom common-diseases report.
    pub fn symptoms(&self, report: SymptomReport) -> Result<SymptomPrediction, ValidationError> {
        if report.symptoms.is_empty() {
            return Err(ValidationError::MissingSymptoms);
        }
        if report.duration.is_none() || report.severity.is_none() {
            return Err(ValidationError::MissingDurationOrSeverity);
        }

        Ok(symptoms::assess(&report))
    }

    /// Heart assessment: delegate first when configured, local otherwise.
    pub async fn heart(
        &self,
        answers: HeartAnswers,
    ) -> Result<ConditionPrediction<HeartAnswers>, ValidationError> {
        require_answers(&questionnaire::heart_fields(&answers))?;

        if let Some(delegate) = &self.delegate {
            match delegate.heart(&answers).await {
                Ok(verdict) => {
                    return Ok(prediction(
                        answers,
                        verdict.risk,
                        verdict.confidence,
                        verdict.confidence,
                        recommendations::for_heart,
                    ));
                }
                Err(err) => {
                    warn!(error = %err, "heart delegate unavailable, falling back to local scoring");
                }
            }
        }

        let outcome = questionnaire::assess_heart(&answers);
        Ok(local_prediction(answers, outcome, recommendations::for_heart))
    }

    /// Diabetes assessment: delegate first when configured, local otherwise.
    pub async fn diabetes(
        &self,
        answers: DiabetesAnswers,
    ) -> Result<ConditionPrediction<DiabetesAnswers>, ValidationError> {
        require_answers(&questionnaire::diabetes_fields(&answers))?;

        if let Some(delegate) = &self.delegate {
            match delegate.diabetes(&answers).await {
                Ok(verdict) => {
                    return Ok(prediction(
                        answers,
                        verdict.risk,
                        verdict.confidence,
                        verdict.confidence,
                        recommendations::for_diabetes,
                    ));
                }
                Err(err) => {
                    warn!(error = %err, "diabetes delegate unavailable, falling back to local scoring");
                }
            }
        }

        let outcome = questionnaire::assess_diabetes(&answers);
        Ok(local_prediction(
            answers,
            outcome,
            recommendations::for_diabetes,
        ))
    }

    /// Parkinson's assessment: always local.
    pub fn parkinsons(
        &self,
        answers: ParkinsonsAnswers,
    ) -> Result<ConditionPrediction<ParkinsonsAnswers>, ValidationError> {
        require_answers(&questionnaire::parkinsons_fields(&answers))?;

        let outcome = questionnaire::assess_parkinsons(&answers);
        Ok(local_prediction(
            answers,
            outcome,
            recommendations::for_parkinsons,
        ))
    }
}

fn require_answers(fields: &[Option<&str>]) -> Result<(), ValidationError> {
    if fields.iter().all(Option::is_none) {
        return Err(ValidationError::EmptyQuestionnaire);
    }
    Ok(())
}

fn local_prediction<F>(
    factors: F,
    outcome: QuestionnaireOutcome,
    advise: fn(RiskTier) -> Vec<String>,
) -> ConditionPrediction<F> {
    prediction(
        factors,
        outcome.risk,
        outcome.confidence,
        outcome.percentage,
        advise,
    )
}

fn prediction<F>(
    factors: F,
    risk: RiskTier,
    confidence: f64,
    risk_score: f64,
    advise: fn(RiskTier) -> Vec<String>,
) -> ConditionPrediction<F> {
    ConditionPrediction {
        risk,
        confidence,
        risk_score,
        factors,
        recommendations: advise(risk),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_symptom_list_is_rejected() {
        let service = AssessmentService::local();
        let err = service
            .symptoms(SymptomReport {
                symptoms: vec![],
                duration: Some("1-2days".to_string()),
                severity: Some("mild".to_string()),
                age: None,
                medical_history: None,
            })
            .expect_err("empty symptoms rejected");
        assert!(matches!(err, ValidationError::MissingSymptoms));
    }

    #[test]
    fn missing_duration_is_rejected() {
        let service = AssessmentService::local();
        let err = service
            .symptoms(SymptomReport {
                symptoms: vec!["cough".to_string()],
                duration: None,
                severity: Some("mild".to_string()),
                age: None,
                medical_history: None,
            })
            .expect_err("missing duration rejected");
        assert!(matches!(err, ValidationError::MissingDurationOrSeverity));
    }

    #[tokio::test]
    async fn unanswered_questionnaire_is_rejected() {
        let service = AssessmentService::local();
        let err = service
            .heart(HeartAnswers::default())
            .await
            .expect_err("all-blank questionnaire rejected");
        assert!(matches!(err, ValidationError::EmptyQuestionnaire));
    }

    #[tokio::test]
    async fn local_heart_prediction_echoes_factors() {
        let service = AssessmentService::local();
        let answers = HeartAnswers {
            chest_pain: Some("often".to_string()),
            breathing_difficulty: Some("severe".to_string()),
            fatigue: Some("always".to_string()),
            heart_rate: Some("irregular".to_string()),
            age: Some("over60".to_string()),
            exercise_habits: Some("rarely".to_string()),
        };
        let prediction = service
            .heart(answers.clone())
            .await
            .expect("valid answers score");
        assert_eq!(prediction.risk, RiskTier::High);
        assert_eq!(prediction.factors, answers);
        assert_eq!(prediction.recommendations.len(), 4);
    }

    #[test]
    fn parkinsons_scores_locally() {
        let service = AssessmentService::local();
        let prediction = service
            .parkinsons(ParkinsonsAnswers {
                hand_shaking: Some("rarely".to_string()),
                ..ParkinsonsAnswers::default()
            })
            .expect("valid answers score");
        assert_eq!(prediction.risk, RiskTier::Low);
        assert!(prediction.risk_score > 0.0);
    }
}
