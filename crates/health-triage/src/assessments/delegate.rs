//! Client for the external prediction service.
//!
//! Heart and diabetes assessments are delegated to an opaque HTTP peer
//! before local scoring. The gateway is a trait so the service facade can
//! be exercised with scripted delegates in tests; every error here is
//! recoverable and triggers local fallback upstream.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::domain::{DiabetesAnswers, HeartAnswers, RiskTier};
use crate::config::DelegateConfig;

/// Verdict mapped from a delegate response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelegateVerdict {
    pub risk: RiskTier,
    pub confidence: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    #[error("delegate returned status {0}")]
    Status(u16),
    #[error("delegate transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Outbound prediction hook consulted before local fallback scoring.
#[async_trait]
pub trait DelegateGateway: Send + Sync {
    async fn heart(&self, answers: &HeartAnswers) -> Result<DelegateVerdict, DelegateError>;
    async fn diabetes(&self, answers: &DiabetesAnswers) -> Result<DelegateVerdict, DelegateError>;
}

/// Reqwest-backed gateway speaking the delegate's JSON wire format.
#[derive(Debug, Clone)]
pub struct HttpDelegate {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct HeartDelegateResponse {
    risk_level: String,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct DiabetesDelegateResponse {
    prediction: String,
    confidence: f64,
}

impl HttpDelegate {
    pub fn from_config(config: &DelegateConfig) -> Result<Self, DelegateError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, DelegateError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("X-API-Key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DelegateError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DelegateGateway for HttpDelegate {
    async fn heart(&self, answers: &HeartAnswers) -> Result<DelegateVerdict, DelegateError> {
        let response: HeartDelegateResponse = self.post("/predict/heart", answers).await?;
        let risk = if response.risk_level.eq_ignore_ascii_case("high") {
            RiskTier::High
        } else {
            RiskTier::Low
        };
        Ok(DelegateVerdict {
            risk,
            confidence: response.confidence,
        })
    }

    async fn diabetes(&self, answers: &DiabetesAnswers) -> Result<DelegateVerdict, DelegateError> {
        let response: DiabetesDelegateResponse = self.post("/predict/diabetes", answers).await?;
        let risk = if response.prediction == "High Risk" {
            RiskTier::High
        } else {
            RiskTier::Low
        };
        Ok(DelegateVerdict {
            risk,
            confidence: response.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn delegate_for(server: &MockServer) -> HttpDelegate {
        HttpDelegate::from_config(&DelegateConfig {
            enabled: true,
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            timeout_ms: 2_000,
        })
        .expect("client builds")
    }

    fn heart_answers() -> HeartAnswers {
        HeartAnswers {
            chest_pain: Some("often".to_string()),
            age: Some("over60".to_string()),
            ..HeartAnswers::default()
        }
    }

    #[tokio::test]
    async fn heart_verdict_maps_risk_level() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict/heart"))
            .and(header("X-API-Key", "test-key"))
            .and(body_partial_json(json!({ "chestPain": "often" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": "High Risk",
                "risk_level": "high",
                "confidence": 87.5,
                "risk_factors": { "chest_pain": "often" }
            })))
            .mount(&server)
            .await;

        let verdict = delegate_for(&server)
            .heart(&heart_answers())
            .await
            .expect("delegate responds");
        assert_eq!(verdict.risk, RiskTier::High);
        assert_eq!(verdict.confidence, 87.5);
    }

    #[tokio::test]
    async fn diabetes_verdict_maps_prediction_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict/diabetes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prediction": "Low Risk",
                "confidence": 79.0,
                "risk_factors": {}
            })))
            .mount(&server)
            .await;

        let verdict = delegate_for(&server)
            .diabetes(&DiabetesAnswers::default())
            .await
            .expect("delegate responds");
        assert_eq!(verdict.risk, RiskTier::Low);
    }

    #[tokio::test]
    async fn non_success_status_becomes_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict/heart"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = delegate_for(&server)
            .heart(&heart_answers())
            .await
            .expect_err("service unavailable");
        assert!(matches!(err, DelegateError::Status(503)));
    }

    #[tokio::test]
    async fn undecodable_body_becomes_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/predict/heart"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = delegate_for(&server)
            .heart(&heart_answers())
            .await
            .expect_err("body must fail to decode");
        assert!(matches!(err, DelegateError::Transport(_)));
    }
}
