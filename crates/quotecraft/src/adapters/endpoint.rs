//! Transform Endpoint Client
//!
//! StyleTransformer that delegates to a running quotecraft server.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, StyleConfig};
use crate::ports::StyleTransformer;

/// Path of the transform endpoint relative to the server base URL
pub const TRANSFORM_QUOTE_PATH: &str = "/api/transform-quote";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransformPayload<'a> {
    quote: &'a str,
    style_config: &'a StyleConfig,
}

#[derive(Deserialize)]
struct TransformReply {
    transformed: String,
}

#[derive(Deserialize)]
struct ErrorReply {
    error: String,
}

/// Client for `POST /api/transform-quote`
#[derive(Clone)]
pub struct EndpointTransformer {
    client: Client,
    url: String,
}

impl EndpointTransformer {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), TRANSFORM_QUOTE_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StyleTransformer for EndpointTransformer {
    async fn transform(&self, quote: &str, style: &StyleConfig) -> Result<String, DomainError> {
        let payload = TransformPayload {
            quote,
            style_config: style,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::from_request("transform endpoint", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorReply>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(DomainError::ExternalService(format!(
                "Transformation failed ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let reply: TransformReply = response
            .json()
            .await
            .map_err(|e| DomainError::from_request("transform endpoint", e))?;

        Ok(reply.transformed)
    }
}
