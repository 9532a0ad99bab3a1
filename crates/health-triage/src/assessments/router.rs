use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::delegate::DelegateGateway;
use super::domain::{
    ConditionPrediction, DiabetesAnswers, HeartAnswers, ParkinsonsAnswers, SymptomPrediction,
    SymptomReport,
};
use super::service::AssessmentService;
use super::taxonomy;
use crate::error::AppError;

/// Router builder exposing the assessment endpoints.
pub fn assessment_router<D>(service: Arc<AssessmentService<D>>) -> Router
where
    D: DelegateGateway + 'static,
{
    Router::new()
        .route("/api/v1/symptoms", get(symptom_catalog_handler))
        .route(
            "/api/v1/predict/common-diseases",
            post(common_diseases_handler::<D>),
        )
        .route("/api/v1/predict/heart", post(heart_handler::<D>))
        .route("/api/v1/predict/diabetes", post(diabetes_handler::<D>))
        .route("/api/v1/predict/parkinsons", post(parkinsons_handler::<D>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct SymptomEnvelope {
    success: bool,
    #[serde(flatten)]
    prediction: SymptomPrediction,
}

#[derive(Debug, Serialize)]
struct PredictionEnvelope<F> {
    success: bool,
    prediction: ConditionPrediction<F>,
}

/// Unparseable bodies surface as the generic processing-failure envelope.
fn process_failure() -> Response {
    let payload = json!({
        "success": false,
        "error": "Failed to process prediction",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}

pub(crate) async fn symptom_catalog_handler() -> Json<serde_json::Value> {
    Json(json!({ "categories": taxonomy::catalog() }))
}

pub(crate) async fn common_diseases_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    payload: Result<Json<SymptomReport>, JsonRejection>,
) -> Response
where
    D: DelegateGateway + 'static,
{
    let Ok(Json(report)) = payload else {
        return process_failure();
    };

    match service.symptoms(report) {
        Ok(prediction) => (
            StatusCode::OK,
            Json(SymptomEnvelope {
                success: true,
                prediction,
            }),
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn heart_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    payload: Result<Json<HeartAnswers>, JsonRejection>,
) -> Response
where
    D: DelegateGateway + 'static,
{
    let Ok(Json(answers)) = payload else {
        return process_failure();
    };

    match service.heart(answers).await {
        Ok(prediction) => (
            StatusCode::OK,
            Json(PredictionEnvelope {
                success: true,
                prediction,
            }),
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn diabetes_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    payload: Result<Json<DiabetesAnswers>, JsonRejection>,
) -> Response
where
    D: DelegateGateway + 'static,
{
    let Ok(Json(answers)) = payload else {
        return process_failure();
    };

    match service.diabetes(answers).await {
        Ok(prediction) => (
            StatusCode::OK,
            Json(PredictionEnvelope {
                success: true,
                prediction,
            }),
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}

pub(crate) async fn parkinsons_handler<D>(
    State(service): State<Arc<AssessmentService<D>>>,
    payload: Result<Json<ParkinsonsAnswers>, JsonRejection>,
) -> Response
where
    D: DelegateGateway + 'static,
{
    let Ok(Json(answers)) = payload else {
        return process_failure();
    };

    match service.parkinsons(answers) {
        Ok(prediction) => (
            StatusCode::OK,
            Json(PredictionEnvelope {
                success: true,
                prediction,
            }),
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
