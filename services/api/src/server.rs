use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredNotifier};
use crate::routes::with_submission_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use two_iron::config::AppConfig;
use two_iron::error::AppError;
use two_iron::questionnaire::ScoringEngine;
use two_iron::submission::SubmissionService;
use two_iron::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let notifier = ConfiguredNotifier::from_config(&config.email);
    let delivery = notifier.label();
    let submission_service = Arc::new(SubmissionService::new(
        Arc::new(notifier),
        ScoringEngine::default(),
    ));

    let app = with_submission_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, delivery, "two-iron questionnaire service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
