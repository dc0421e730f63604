//! Server configuration
//!
//! Read from Shuttle secrets (Secrets.toml locally).

use std::time::Duration;

use quotecraft::adapters::http_quote::DEFAULT_QUOTE_TIMEOUT;
use quotecraft::adapters::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use quotecraft::QuoteClientConfig;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Key for the chat completion API; transform is disabled without it
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Per-attempt timeout for quote providers
    pub quote_timeout: Duration,
    /// Accept self-signed or broken certificate chains from quote providers
    pub quote_accept_invalid_certs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            quote_timeout: DEFAULT_QUOTE_TIMEOUT,
            quote_accept_invalid_certs: true,
        }
    }
}

impl ServerConfig {
    /// Build from a key lookup (Shuttle's SecretStore in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let quote_timeout = match get("QUOTE_TIMEOUT_MS").map(|v| v.parse::<u64>()) {
            Some(Ok(ms)) if ms > 0 => Duration::from_millis(ms),
            Some(_) => {
                tracing::warn!(
                    "⚠️  Invalid QUOTE_TIMEOUT_MS - using {}ms",
                    defaults.quote_timeout.as_millis()
                );
                defaults.quote_timeout
            }
            None => defaults.quote_timeout,
        };

        let quote_accept_invalid_certs = match get("QUOTE_ACCEPT_INVALID_CERTS") {
            Some(v) => !matches!(v.to_lowercase().as_str(), "false" | "0" | "no" | "off"),
            None => defaults.quote_accept_invalid_certs,
        };

        Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            quote_timeout,
            quote_accept_invalid_certs,
        }
    }

    /// HTTP client settings for the quote chain
    pub fn quote_client(&self) -> QuoteClientConfig {
        QuoteClientConfig {
            timeout: self.quote_timeout,
            accept_invalid_certs: self.quote_accept_invalid_certs,
            ..QuoteClientConfig::default()
        }
    }
}
