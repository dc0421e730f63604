//! StyleConfig - A named rewrite prompt

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;

/// StyleConfig - Instructions handed to the language model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Human readable name
    pub name: String,
    /// System prompt sent with the quote
    pub system_prompt: String,
    /// Presentation hint for the widget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
}

impl StyleConfig {
    pub fn new(name: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system_prompt: system_prompt.into(),
            css_class: None,
        }
    }

    /// Set the presentation class
    pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Reject a rewrite that has nothing to rewrite or no instructions
    pub fn validate_request(&self, quote: &str) -> Result<(), DomainError> {
        if quote.trim().is_empty() {
            return Err(DomainError::Validation("quote must not be empty".to_string()));
        }
        if self.system_prompt.trim().is_empty() {
            return Err(DomainError::Validation(
                "styleConfig.systemPrompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
