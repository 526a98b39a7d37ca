use crate::cli::ServeArgs;
use crate::infra::{override_scoring_url, AppState};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use eco_intellect::config::AppConfig;
use eco_intellect::dashboard::{DashboardController, HttpAnalysisClient};
use eco_intellect::error::AppError;
use eco_intellect::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    override_scoring_url(&mut config, args.scoring_url.take())?;

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let client = Arc::new(HttpAnalysisClient::from_config(&config.scoring)?);
    let controller = Arc::new(DashboardController::with_config(client, &config.checkout));

    let app = with_dashboard_routes(controller)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        scoring_endpoint = %config.scoring.analyze_url(),
        "eco dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
