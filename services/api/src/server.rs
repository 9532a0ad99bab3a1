use crate::cli::ServeArgs;
use crate::infra::{build_delegate, simulated_latency, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use health_triage::assessments::AssessmentService;
use health_triage::config::AppConfig;
use health_triage::error::AppError;
use health_triage::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        simulated_latency: simulated_latency(config.server.simulated_latency_ms),
    };

    let delegate = build_delegate(&config.delegate);
    let delegate_active = delegate.is_some();
    let service = Arc::new(AssessmentService::new(delegate));

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, delegate_active, "health triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
