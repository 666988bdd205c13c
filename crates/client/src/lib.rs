//! Typed client for the sitegen generation API.
//!
//! Wraps a reqwest client with JSON `get`/`post` over a base URL and exposes
//! one function per API route. Errors distinguish transport failures from
//! non-2xx responses; the latter carry the status code and body text.

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use sitegen_shared::{GenerateRequest, GenerationResponse, HealthStatus};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: unreachable host, timeout, connection reset.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("http {status}: {body}")]
    Http { status: StatusCode, body: String },
    /// The response body could not be decoded as the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid client config: {0}")]
    Config(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Config)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// GET `path` and decode the JSON body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(ClientError::Network)?;

        decode_response(response).await
    }

    /// Serialize `body` as JSON, POST it to `path`, decode the response as `T`.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(ClientError::Network)?;

        decode_response(response).await
    }

    /// Generate a website from a prompt.
    pub async fn generate_website(&self, prompt: &str) -> Result<GenerationResponse, ClientError> {
        self.post(
            "/api/v1/ai/generate",
            &GenerateRequest {
                prompt: prompt.to_string(),
            },
        )
        .await
    }

    /// Query the service health endpoint.
    pub async fn health_check(&self) -> Result<HealthStatus, ClientError> {
        self.get("/api/v1/ai/health").await
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Http { status, body });
    }

    response.json().await.map_err(ClientError::Decode)
}
