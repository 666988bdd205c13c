pub mod llm;
pub mod providers;

// Re-export the main traits and types
pub use llm::{
    ChatMessage, LlmConnector, LlmError, LlmRequest, LlmResponse, LlmResult, MessageRole,
    TokenUsage,
};

// Re-export provider modules for easy access
pub use providers::openrouter::{OpenRouter, OpenRouterConfig};
