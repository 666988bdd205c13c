use crate::llm::{
    ChatMessage, LlmConnector, LlmError, LlmRequest, LlmResponse, LlmResult, MessageRole,
    TokenUsage,
};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_ATTEMPTS: u32 = 2;

/// OpenRouter provider configuration
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_model: String,
    pub referer: String,
    pub title: String,
}

impl OpenRouterConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            default_model: "meta-llama/llama-3-8b-instruct:free".to_string(),
            referer: "http://localhost:5173".to_string(),
            title: "Sitegen".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.default_model = model;
        self
    }

    pub fn with_referer(mut self, referer: String) -> Self {
        self.referer = referer;
        self
    }
}

/// OpenRouter LLM Connector
#[derive(Debug, Clone)]
pub struct OpenRouterLlmConnector {
    config: OpenRouterConfig,
    client: reqwest::Client,
}

impl OpenRouterLlmConnector {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn convert_messages(messages: &[ChatMessage]) -> Vec<serde_json::Value> {
        messages
            .iter()
            .map(|msg| {
                json!({
                    "role": match msg.role {
                        MessageRole::System => "system",
                        MessageRole::User => "user",
                        MessageRole::Assistant => "assistant",
                    },
                    "content": msg.content
                })
            })
            .collect()
    }

    fn build_payload(request: &LlmRequest, model: &str) -> serde_json::Value {
        let mut messages = Self::convert_messages(&request.messages);

        // System prompt goes first; a request without one still gets a
        // generic assistant prompt, matching the upstream API's expectations.
        let system_prompt = request
            .system_prompt
            .clone()
            .unwrap_or_else(|| "You are a helpful AI assistant.".to_string());
        messages.insert(
            0,
            json!({
                "role": "system",
                "content": system_prompt
            }),
        );

        let mut payload = json!({
            "model": model,
            "messages": messages,
        });

        if let Some(temp) = request.temperature {
            payload["temperature"] = json!(temp);
        }
        if let Some(max_tokens) = request.max_tokens {
            payload["max_tokens"] = json!(max_tokens);
        }

        payload
    }

    /// POST the payload, retrying once on transport failure. HTTP error
    /// statuses are returned to the caller, never retried.
    async fn send_with_retry(&self, payload: &serde_json::Value) -> LlmResult<reqwest::Response> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let mut attempt = 1;
        loop {
            let result = self
                .client
                .post(&url)
                .timeout(REQUEST_TIMEOUT)
                .header("Authorization", format!("Bearer {}", self.config.api_key))
                .header("Content-Type", "application/json")
                .header("HTTP-Referer", &self.config.referer)
                .header("X-Title", &self.config.title)
                .json(payload)
                .send()
                .await;

            match result {
                Ok(response) => return Ok(response),
                Err(e) if attempt < MAX_ATTEMPTS => {
                    warn!("OpenRouter request failed (attempt {}): {}", attempt, e);
                    attempt += 1;
                }
                Err(e) => return Err(LlmError::Network(e)),
            }
        }
    }
}

fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value["error"]["message"]
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

fn parse_completion(response: &serde_json::Value) -> LlmResult<(String, TokenUsage)> {
    let text = response["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            LlmError::InvalidResponse("missing choices[0].message.content".to_string())
        })?
        .to_string();

    let usage = &response["usage"];
    let token_usage = TokenUsage {
        prompt_tokens: usage["prompt_tokens"].as_u64().unwrap_or(0) as u32,
        completion_tokens: usage["completion_tokens"].as_u64().unwrap_or(0) as u32,
        total_tokens: usage["total_tokens"].as_u64().unwrap_or(0) as u32,
    };

    Ok((text, token_usage))
}

#[async_trait]
impl LlmConnector for OpenRouterLlmConnector {
    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    async fn health_check(&self) -> LlmResult<bool> {
        let response = self
            .client
            .get(format!("{}/models", self.config.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    async fn generate(&self, request: LlmRequest) -> LlmResult<LlmResponse> {
        let start_time = Instant::now();

        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.default_model.clone());
        let payload = Self::build_payload(&request, &model);

        let response = self.send_with_retry(&payload).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Provider {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let response_json: serde_json::Value = response.json().await?;
        let (text, usage) = parse_completion(&response_json)?;

        Ok(LlmResponse {
            text,
            model_used: model,
            usage,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    async fn available_models(&self) -> LlmResult<Vec<String>> {
        let response = self
            .client
            .get(format!("{}/models", self.config.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let models_json: serde_json::Value = response.json().await?;
        let models = models_json["data"]
            .as_array()
            .ok_or_else(|| LlmError::InvalidResponse("missing data array".to_string()))?
            .iter()
            .filter_map(|model| model["id"].as_str().map(|s| s.to_string()))
            .collect();

        Ok(models)
    }
}

/// Factory functions for OpenRouter connectors
pub struct OpenRouter;

impl OpenRouter {
    pub fn llm_connector(config: OpenRouterConfig) -> Arc<dyn LlmConnector> {
        Arc::new(OpenRouterLlmConnector::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OpenRouterConfig::new("sk-test".to_string());
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.default_model, "meta-llama/llama-3-8b-instruct:free");
    }

    #[test]
    fn config_base_url_strips_trailing_slash() {
        let config = OpenRouterConfig::new("sk-test".to_string())
            .with_base_url("http://localhost:9999/v1/".to_string());
        assert_eq!(config.base_url, "http://localhost:9999/v1");
    }

    #[test]
    fn payload_prepends_system_prompt() {
        let request = LlmRequest::single_turn("make a blog", "you are a planner");
        let payload = OpenRouterLlmConnector::build_payload(&request, "some/model");

        assert_eq!(payload["model"], "some/model");
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "you are a planner");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "make a blog");
    }

    #[test]
    fn payload_without_system_prompt_gets_generic_one() {
        let mut request = LlmRequest::single_turn("hi", "x");
        request.system_prompt = None;
        let payload = OpenRouterLlmConnector::build_payload(&request, "m");
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages[0]["content"], "You are a helpful AI assistant.");
    }

    #[test]
    fn payload_includes_optional_sampling_params() {
        let mut request = LlmRequest::single_turn("hi", "sys");
        request.temperature = Some(0.5);
        request.max_tokens = Some(256);
        let payload = OpenRouterLlmConnector::build_payload(&request, "m");
        assert_eq!(payload["temperature"], 0.5);
        assert_eq!(payload["max_tokens"], 256);
    }

    #[test]
    fn parse_completion_extracts_text_and_usage() {
        let response = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        });
        let (text, usage) = parse_completion(&response).unwrap();
        assert_eq!(text, "hello");
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.total_tokens, 15);
    }

    #[test]
    fn parse_completion_rejects_missing_content() {
        let response = serde_json::json!({"choices": []});
        let err = parse_completion(&response).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[test]
    fn error_message_prefers_structured_body() {
        let body = r#"{"error": {"message": "rate limited"}}"#;
        assert_eq!(extract_error_message(body), "rate limited");
        assert_eq!(extract_error_message("plain text"), "plain text");
    }
}
