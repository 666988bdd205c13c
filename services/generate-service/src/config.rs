use anyhow::{bail, Result};

pub const DEFAULT_MODEL: &str = "meta-llama/llama-3-8b-instruct:free";
const DEFAULT_PORT: u16 = 8080;

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .unwrap_or_default()
            .trim()
            .to_string();
        validate_api_key(&api_key)?;

        let base_url = std::env::var("OPENROUTER_BASE_URL").ok();
        let model = std::env::var("SITEGEN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse()?,
            Err(_) => DEFAULT_PORT,
        };
        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|value| parse_cors_origins(&value))
            .unwrap_or_else(|_| default_cors_origins());

        Ok(Self {
            api_key,
            base_url,
            model,
            port,
            cors_origins,
        })
    }
}

pub fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.is_empty() {
        bail!("OPENROUTER_API_KEY is missing. Please set it in the environment or .env.");
    }
    if !api_key.starts_with("sk-") || api_key.len() < 20 {
        bail!("Invalid OPENROUTER_API_KEY format. Ensure a valid key is set.");
    }
    Ok(())
}

fn parse_cors_origins(value: &str) -> Vec<String> {
    let origins: Vec<String> = value
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() {
        default_cors_origins()
    } else {
        origins
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
    ]
}
