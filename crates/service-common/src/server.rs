use crate::handlers::{health_check, readiness_check, ServiceState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Runs the service: mounts the probe routes next to the service's own
/// routes and serves until the process exits.
pub async fn run<S: ServiceState + 'static>(
    state: Arc<S>,
    port: u16,
    routes: Router<Arc<S>>,
) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/health", get(health_check::<S>))
        .route("/ready", get(readiness_check::<S>))
        .merge(routes)
        .with_state(state.clone())
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", port);
    info!("{} service starting on {}", state.service_name(), addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
