//! Style Transformer Port
//!
//! Rewrites a quote according to a StyleConfig. The server implements it
//! on top of an LLM provider, the widget on top of the transform endpoint.

use async_trait::async_trait;

use crate::domain::entities::StyleConfig;
use crate::domain::errors::DomainError;

#[async_trait]
pub trait StyleTransformer: Send + Sync {
    /// Return the rewritten quote text
    async fn transform(&self, quote: &str, style: &StyleConfig) -> Result<String, DomainError>;
}
