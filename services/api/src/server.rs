use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use menu_advisor::config::AppConfig;
use menu_advisor::error::AppError;
use menu_advisor::telemetry::{self, LogSink};
use menu_advisor::workflows::menu::DishImageCatalog;
use menu_advisor::workflows::recommendation::{DishSelector, RecommendationService};
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

    telemetry::init(&config.telemetry, LogSink::Service)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let images = DishImageCatalog::new(config.catalog.image_dir.clone());
    let recommendation_service = Arc::new(RecommendationService::new(
        DishSelector::default(),
        images,
    ));

    let app = with_recommendation_routes(recommendation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        image_dir = %config.catalog.image_dir.display(),
        "menu advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
