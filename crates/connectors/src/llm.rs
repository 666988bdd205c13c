use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub messages: Vec<ChatMessage>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub system_prompt: Option<String>,
}

impl LlmRequest {
    /// Single-turn request: one user message plus a system prompt.
    pub fn single_turn(prompt: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: MessageRole::User,
                content: prompt.into(),
                timestamp: chrono::Utc::now(),
            }],
            model: None,
            temperature: None,
            max_tokens: None,
            system_prompt: Some(system_prompt.into()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub model_used: String,
    pub usage: TokenUsage,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Errors surfaced by an LLM provider call.
///
/// `Provider` carries the upstream HTTP status so callers can pass it
/// through; `Network` is a transport failure and is the only retryable
/// variant.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("request to provider failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}

pub type LlmResult<T> = Result<T, LlmError>;

/// Generic LLM connector trait that all providers must implement
#[async_trait]
pub trait LlmConnector: Send + Sync {
    /// Unique identifier for this connector
    fn provider_name(&self) -> &'static str;

    /// Check if the connector is healthy and ready to process requests
    async fn health_check(&self) -> LlmResult<bool>;

    /// Generate a response based on the conversation
    async fn generate(&self, request: LlmRequest) -> LlmResult<LlmResponse>;

    /// Get available models
    async fn available_models(&self) -> LlmResult<Vec<String>>;
}
