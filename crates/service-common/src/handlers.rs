//! HTTP handlers for liveness and readiness endpoints

use crate::types::ReadinessResponse;
use axum::{extract::State, http::StatusCode, Json};
use sitegen_shared::HealthStatus;
use std::sync::Arc;

#[async_trait::async_trait]
pub trait ServiceState: Send + Sync {
    fn service_name(&self) -> String;
    async fn is_ready(&self) -> Vec<crate::types::HealthCheck>;
}

pub async fn health_check<S: ServiceState>(State(state): State<Arc<S>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: state.service_name(),
    })
}

pub async fn readiness_check<S: ServiceState>(
    State(state): State<Arc<S>>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let checks = state.is_ready().await;
    let all_healthy = checks.iter().all(|c| c.is_healthy());

    let response = ReadinessResponse {
        status: if all_healthy {
            "ready".to_string()
        } else {
            "not_ready".to_string()
        },
        service: state.service_name(),
        checks,
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
