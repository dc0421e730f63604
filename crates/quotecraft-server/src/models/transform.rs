//! Transform Models

use quotecraft::StyleConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/transform-quote`
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    /// Quote text as displayed by the widget ("content - author")
    pub quote: String,
    /// Style to apply
    pub style_config: StyleConfig,
}

/// Successful transform result
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TransformResponse {
    pub transformed: String,
}
