use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use health_triage::assessments::HttpDelegate;
use health_triage::config::DelegateConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// Artificial pre-response delay for predict endpoints; `None` disables it.
    pub(crate) simulated_latency: Option<Duration>,
}

pub(crate) fn simulated_latency(latency_ms: u64) -> Option<Duration> {
    (latency_ms > 0).then(|| Duration::from_millis(latency_ms))
}

/// Build the delegate gateway when enabled. A client that fails to build
/// downgrades the service to local-only scoring rather than aborting startup.
pub(crate) fn build_delegate(config: &DelegateConfig) -> Option<Arc<HttpDelegate>> {
    if !config.enabled {
        return None;
    }

    match HttpDelegate::from_config(config) {
        Ok(delegate) => Some(Arc::new(delegate)),
        Err(err) => {
            warn!(error = %err, "delegate client unavailable, scoring locally");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_latency_disables_the_delay() {
        assert_eq!(simulated_latency(0), None);
        assert_eq!(simulated_latency(1500), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn disabled_delegate_yields_none() {
        let config = DelegateConfig {
            enabled: false,
            base_url: "http://localhost:8000".to_string(),
            api_key: "changeme".to_string(),
            timeout_ms: 4000,
        };
        assert!(build_delegate(&config).is_none());
    }
}
