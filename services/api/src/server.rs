use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicationRepository, LoggingNotificationPublisher};
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use partner_vetting::config::AppConfig;
use partner_vetting::error::AppError;
use partner_vetting::telemetry;
use partner_vetting::vetting::PartnerVettingService;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(PartnerVettingService::new(
        Arc::new(InMemoryApplicationRepository::default()),
        Arc::new(LoggingNotificationPublisher),
        config.report.clone(),
    ));

    let app = with_application_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        report_zone = %config.report.zone_label,
        "partner vetting service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
