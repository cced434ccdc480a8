use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_companion_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use health_companions::config::AppConfig;
use health_companions::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(
    mut config: AppConfig,
    mut args: ServeArgs,
    data_path: Option<PathBuf>,
) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if data_path.is_some() {
        config.companions.data_path = data_path;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = build_service(&config.companions, config.companions.data_path.as_deref())?;

    let app = with_companion_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        classifier = config.companions.classifier.as_str(),
        "health companions service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
