use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore};
use crate::routes::router;
use advisory_site::config::AppConfig;
use advisory_site::content::GuideLibrary;
use advisory_site::error::AppError;
use advisory_site::survey::delivery::delivery_from_config;
use advisory_site::survey::{QuestionBank, ReportDelivery};
use advisory_site::telemetry;
use axum_prometheus::PrometheusMetricLayer;
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

    // The blocking relay client owns its own runtime and must be built off the async workers.
    let relay = config.relay.clone();
    let delivery: Arc<dyn ReportDelivery> =
        tokio::task::spawn_blocking(move || delivery_from_config(&relay))
            .await
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?
            .map(Arc::from)?;
    let guides = GuideLibrary::new(config.content.guides_dir.clone());
    info!(
        relay_enabled = config.relay.endpoint.is_some(),
        guides_dir = %guides.root().display(),
        "survey collaborators configured"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        bank: Arc::new(QuestionBank::standard()),
        sessions: InMemorySessionStore::default(),
        delivery,
        guides: Arc::new(guides),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "advisory site api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
