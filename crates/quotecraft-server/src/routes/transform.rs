//! Transform Routes - Style rewrite via the language model

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use quotecraft::{DomainError, TRANSFORM_QUOTE_PATH};

use crate::models::{api_error, ApiError, ErrorResponse, TransformRequest, TransformResponse};
use crate::AppState;

const TRANSFORM_FAILED: &str = "Failed to transform quote";

/// Rewrite a quote in the requested style
#[utoipa::path(
    post,
    path = "/api/transform-quote",
    request_body = TransformRequest,
    responses(
        (status = 200, description = "Quote transformed", body = TransformResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Transformation failed", body = ErrorResponse)
    ),
    tag = "Transform"
)]
pub async fn transform_quote(
    State(state): State<AppState>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Json<TransformResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("Rejected transform request: {}", rejection.body_text());
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    })?;

    let transformed = state
        .transform_service
        .transform(&payload.quote, &payload.style_config)
        .await
        .map_err(|e| match e {
            DomainError::Validation(msg) => api_error(StatusCode::BAD_REQUEST, msg),
            other => {
                tracing::error!(
                    "Failed to transform quote with style '{}': {}",
                    payload.style_config.name,
                    other
                );
                api_error(StatusCode::INTERNAL_SERVER_ERROR, TRANSFORM_FAILED)
            }
        })?;

    tracing::info!("🎭 Quote transformed ({})", payload.style_config.name);

    Ok(Json(TransformResponse { transformed }))
}

async fn method_not_allowed() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        TRANSFORM_QUOTE_PATH,
        post(transform_quote).fallback(method_not_allowed),
    )
}
