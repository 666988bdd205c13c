//! Generation service: HTTP state, routes and handlers.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sitegen_agents::GenerationPipeline;
use sitegen_service_common::{handlers, HealthCheck, ServiceState};
use sitegen_shared::{GenerateRequest, GenerationResponse};
use std::sync::Arc;
use tracing::info;

pub mod config;
pub mod error;

pub use error::ApiError;

pub const SERVICE_NAME: &str = "generate-service";

pub struct AppState {
    pub pipeline: GenerationPipeline,
}

#[async_trait::async_trait]
impl ServiceState for AppState {
    fn service_name(&self) -> String {
        SERVICE_NAME.to_string()
    }

    async fn is_ready(&self) -> Vec<HealthCheck> {
        let connector = self.pipeline.connector();
        let healthy = connector.health_check().await.unwrap_or(false);
        let name = format!("connector_{}", connector.provider_name());

        vec![if healthy {
            HealthCheck::healthy(name, "Ready")
        } else {
            HealthCheck::unhealthy(name, "Not ready")
        }]
    }
}

/// Public API routes; probe routes are mounted by the shared server runner.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/ai/generate", post(generate_website))
        .route("/api/v1/ai/health", get(handlers::health_check::<AppState>))
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "sitegen generation API",
        "health": "/api/v1/ai/health"
    }))
}

/// Runs the three-agent pipeline for one prompt and returns the merged
/// result.
pub async fn generate_website(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    info!(
        "Received generation request ({} chars)",
        request.prompt.len()
    );

    let response = state.pipeline.run(&request.prompt).await?;
    Ok(Json(response))
}
