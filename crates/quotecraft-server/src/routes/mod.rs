//! Quotecraft API Routes
//!
//! - /api/get-quote - Random quote (provider chain + local fallback)
//! - /api/transform-quote - Style rewrite via language model
//! - /health - Liveness
//! - /swagger-ui - OpenAPI documentation

pub mod quote;
pub mod swagger;
pub mod transform;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Assemble every route with shared state and middleware
pub fn build_router(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(crate::health_check))
        .merge(quote::router())
        .merge(transform::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
