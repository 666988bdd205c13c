use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/ai/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Merged output of the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub plan: String,
    pub copywriting: String,
    pub code: String,
    pub final_code: String,
    pub improvements: Vec<String>,
    pub summary: String,
}

/// Response body for `GET /api/v1/ai/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}
