//! Transform Application Service (Use Case)
//!
//! Validates a rewrite request and hands it to the configured transformer.

use std::sync::Arc;

use quotecraft::{DomainError, StyleConfig, StyleTransformer};

/// Application service behind `POST /api/transform-quote`
pub struct TransformService<T: StyleTransformer> {
    transformer: Option<Arc<T>>,
}

impl<T: StyleTransformer> TransformService<T> {
    pub fn new(transformer: Option<Arc<T>>) -> Self {
        Self { transformer }
    }

    pub fn is_enabled(&self) -> bool {
        self.transformer.is_some()
    }

    /// Rewrite a quote in the given style
    pub async fn transform(&self, quote: &str, style: &StyleConfig) -> Result<String, DomainError> {
        style.validate_request(quote)?;

        let transformer = self.transformer.as_ref().ok_or_else(|| {
            DomainError::Configuration("No language model configured".to_string())
        })?;

        transformer.transform(quote, style).await
    }
}
