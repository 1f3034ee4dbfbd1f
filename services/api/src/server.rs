use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCaseStore};
use crate::routes::scene_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use epical_engine::config::AppConfig;
use epical_engine::error::AppError;
use epical_engine::scene::{SceneEngine, SystemClock};
use epical_engine::telemetry;
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

    let engine_config = config.engine_config()?;
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: Arc::new(SceneEngine::new(engine_config, Arc::new(SystemClock))),
        cases: Arc::new(InMemoryCaseStore::default()),
    };

    let app = scene_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        policy = ?config.policy.path,
        "scene evaluation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
