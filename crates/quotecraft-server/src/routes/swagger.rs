//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use quotecraft::{Quote, StyleConfig};

use crate::models::{ErrorResponse, TransformRequest, TransformResponse};
use crate::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        super::quote::get_quote,
        super::transform::transform_quote,
    ),
    info(
        title = "Quotecraft API",
        version = "0.1.0",
        description = "Random quotes with provider fallback, rewritten in the style of your choice.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Quote", description = "Quote - Random quote with fallback chain"),
        (name = "Transform", description = "Transform - Style rewrite via language model"),
    ),
    components(
        schemas(
            HealthCheck,
            Quote,
            StyleConfig,
            TransformRequest,
            TransformResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
