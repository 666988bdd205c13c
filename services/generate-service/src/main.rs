use anyhow::Result;
use axum::http::HeaderValue;
use sitegen_agents::GenerationPipeline;
use sitegen_connectors::{OpenRouter, OpenRouterConfig};
use sitegen_generate_service::config::ServiceConfig;
use sitegen_generate_service::{api_routes, AppState};
use sitegen_service_common::server;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env()?;
    info!("Starting generate service with model {}", config.model);

    let mut provider_config =
        OpenRouterConfig::new(config.api_key.clone()).with_model(config.model.clone());
    if let Some(base_url) = &config.base_url {
        provider_config = provider_config.with_base_url(base_url.clone());
    }
    let connector = OpenRouter::llm_connector(provider_config);
    info!("Registered OpenRouter connector");

    let pipeline = GenerationPipeline::new(connector, config.model.clone());
    let state = Arc::new(AppState { pipeline });

    let routes = api_routes().layer(cors_layer(&config.cors_origins)?);

    server::run(state, config.port, routes).await
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
