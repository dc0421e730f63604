use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use quotecraft::{
    build_llm_client, build_quote_client, default_server_sources, server_fallback_quotes,
    LlmStyleTransformer, OpenAiProvider, QuoteChain, DEFAULT_LLM_TIMEOUT,
};

mod application;
mod config;
mod models;
mod routes;

use application::{QuoteService, TransformService};
use config::ServerConfig;

/// Type alias for the transform service with the LLM-backed transformer
pub type AppTransformService = TransformService<LlmStyleTransformer>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub quote_service: Arc<QuoteService>,
    pub transform_service: Arc<AppTransformService>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Quotecraft API is running - quotes in, styles out".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📜 Quotecraft API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key));

    // Quote chain: stoic -> zenquotes -> forismatic -> local list
    let client =
        build_quote_client(&config.quote_client()).map_err(shuttle_runtime::CustomError::new)?;
    let chain = QuoteChain::new(default_server_sources(&client), server_fallback_quotes())
        .map_err(shuttle_runtime::CustomError::new)?;
    let quote_service = Arc::new(QuoteService::new(chain));

    tracing::info!(
        "🔗 Quote chain: {} (timeout {}ms per attempt)",
        quote_service.source_names().join(" -> "),
        config.quote_timeout.as_millis()
    );
    if config.quote_accept_invalid_certs {
        tracing::warn!("⚠️  Quote providers: TLS certificate validation disabled");
    }

    // Transformer is optional: without a key the endpoint answers 500
    let llm_client =
        build_llm_client(DEFAULT_LLM_TIMEOUT).map_err(shuttle_runtime::CustomError::new)?;
    let transformer = config.openai_api_key.as_ref().map(|key| {
        let provider = OpenAiProvider::new(llm_client.clone(), key.clone())
            .with_model(config.openai_model.clone())
            .with_base_url(config.openai_base_url.clone());
        tracing::info!("🎭 Style transformer initialized ({})", config.openai_model);
        Arc::new(LlmStyleTransformer::new(Arc::new(provider)))
    });

    let transform_service = Arc::new(TransformService::new(transformer));
    if !transform_service.is_enabled() {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - quote transformation disabled");
    }

    let state = AppState {
        quote_service,
        transform_service,
    };

    let router = routes::build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Quotecraft API ready");

    Ok(router.into())
}
