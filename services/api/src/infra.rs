use eco_intellect::config::{AppConfig, ConfigError, ScoringConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Point the scoring client somewhere else while keeping the configured timeout.
pub(crate) fn override_scoring_url(
    config: &mut AppConfig,
    url: Option<String>,
) -> Result<(), ConfigError> {
    if let Some(url) = url {
        config.scoring = ScoringConfig::new(url, config.scoring.timeout)?;
    }
    Ok(())
}
