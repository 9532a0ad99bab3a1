use crate::infra::AppState;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use health_triage::assessments::{assessment_router, AssessmentService, DelegateGateway};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes<D>(service: Arc<AssessmentService<D>>) -> axum::Router
where
    D: DelegateGateway + 'static,
{
    assessment_router(service)
        .layer(middleware::from_fn(simulated_latency_layer))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Delay predict responses by the configured amount to mimic model
/// inference latency. Applied only inside the assessment router, so the
/// operational endpoints answer immediately.
async fn simulated_latency_layer(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let latency = state
        .simulated_latency
        .filter(|_| request.uri().path().starts_with("/api/v1/predict/"));

    if let Some(delay) = latency {
        tokio::time::sleep(delay).await;
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Method;
    use axum::Router;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            simulated_latency: None,
        }
    }

    fn app(ready: bool) -> Router {
        with_service_routes(Arc::new(AssessmentService::local()))
            .layer(Extension(test_state(ready)))
    }

    async fn get(router: Router, uri: &str) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = get(app(true), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = get(app(false), "/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = get(app(true), "/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn predict_endpoint_served_through_composed_router() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/predict/common-diseases")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "symptoms": ["cough"],
                    "duration": "1-2days",
                    "severity": "mild"
                })
                .to_string(),
            ))
            .expect("request builds");

        let response = app(true).oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(body["success"], true);
        assert_eq!(body["risk"], "low");
    }
}
