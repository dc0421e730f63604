//! LLM Style Transformer
//!
//! Builds the chat prompt for a style rewrite and hands it to an LlmProvider.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainError, StyleConfig};
use crate::ports::{ChatMessage, CompletionOptions, LlmProvider, StyleTransformer};

/// StyleTransformer backed by a language model
pub struct LlmStyleTransformer {
    provider: Arc<dyn LlmProvider>,
    options: CompletionOptions,
}

impl LlmStyleTransformer {
    /// Create a transformer with the default options (temperature 0.7, 200 tokens)
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            options: CompletionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the conversation sent to the model
    pub fn build_messages(quote: &str, style: &StyleConfig) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(style.system_prompt.as_str()),
            ChatMessage::user(format!("Transform this quote: \"{}\"", quote)),
        ]
    }
}

#[async_trait]
impl StyleTransformer for LlmStyleTransformer {
    async fn transform(&self, quote: &str, style: &StyleConfig) -> Result<String, DomainError> {
        style.validate_request(quote)?;

        let messages = Self::build_messages(quote, style);
        let response = self.provider.complete(&messages, &self.options).await?;

        let transformed = response.content.trim();
        if transformed.is_empty() {
            return Err(DomainError::ExternalService(format!(
                "{} returned an empty completion",
                self.provider.provider_name()
            )));
        }

        tracing::info!(
            "Transformed quote with style '{}' via {} ({})",
            style.name,
            self.provider.provider_name(),
            response.model
        );

        Ok(transformed.to_string())
    }
}
