//! Sitegen Agents
//!
//! Runs the planner, copywriter and code agents against an LLM connector
//! and merges their outputs into a single generation result.

use sitegen_connectors::{LlmConnector, LlmRequest, LlmResult};
use sitegen_shared::GenerationResponse;
use std::sync::Arc;
use tracing::info;

pub mod merge;
pub mod prompts;

pub use merge::{extract_improvements, merge_outputs};

/// Orchestrates the three generation agents over a shared connector.
#[derive(Clone)]
pub struct GenerationPipeline {
    connector: Arc<dyn LlmConnector>,
    model: String,
}

impl GenerationPipeline {
    pub fn new(connector: Arc<dyn LlmConnector>, model: impl Into<String>) -> Self {
        Self {
            connector,
            model: model.into(),
        }
    }

    pub fn connector(&self) -> &Arc<dyn LlmConnector> {
        &self.connector
    }

    /// Runs the full pipeline for one user prompt.
    ///
    /// Planner and copywriter run concurrently; the code agent runs after
    /// with their outputs as context.
    pub async fn run(&self, user_prompt: &str) -> LlmResult<GenerationResponse> {
        info!("Running generation pipeline for prompt ({} chars)", user_prompt.len());

        let (plan, copy) = tokio::try_join!(
            self.run_planner(user_prompt),
            self.run_copywriter(user_prompt),
        )?;

        let code = self.run_code(user_prompt, &plan, &copy).await?;

        Ok(merge::merge_outputs(plan, copy, code))
    }

    async fn run_planner(&self, user_prompt: &str) -> LlmResult<String> {
        self.complete(
            prompts::planner_prompt(user_prompt),
            prompts::PLANNER_SYSTEM_PROMPT,
        )
        .await
    }

    async fn run_copywriter(&self, user_prompt: &str) -> LlmResult<String> {
        self.complete(
            prompts::copywriter_prompt(user_prompt),
            prompts::COPYWRITER_SYSTEM_PROMPT,
        )
        .await
    }

    async fn run_code(&self, user_prompt: &str, plan: &str, copy: &str) -> LlmResult<String> {
        self.complete(
            prompts::code_prompt(user_prompt, plan, copy),
            prompts::CODE_SYSTEM_PROMPT,
        )
        .await
    }

    async fn complete(&self, prompt: String, system_prompt: &str) -> LlmResult<String> {
        let request = LlmRequest::single_turn(prompt, system_prompt).with_model(self.model.clone());
        let response = self.connector.generate(request).await?;
        Ok(response.text)
    }
}
