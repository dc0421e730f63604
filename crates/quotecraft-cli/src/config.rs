//! Configuration management for the Quotecraft widget
//!
//! Stores the server URL and quote strategy in ~/.config/quotecraft/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_DIR: &str = "quotecraft";
const CONFIG_FILE: &str = "config.toml";

/// Environment override for the server base URL
pub const BASE_URL_ENV: &str = "QUOTECRAFT_BASE_URL";

/// How the widget looks for a quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStrategy {
    /// Our quote endpoint first, then the direct strategies
    #[default]
    Endpoint,
    /// Only the direct strategies (plain HTTP, CORS proxy, alternative API)
    Direct,
}

impl std::fmt::Display for QuoteStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStrategy::Endpoint => write!(f, "endpoint"),
            QuoteStrategy::Direct => write!(f, "direct"),
        }
    }
}

impl std::str::FromStr for QuoteStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "endpoint" => Ok(QuoteStrategy::Endpoint),
            "direct" => Ok(QuoteStrategy::Direct),
            _ => Err(format!("Unknown strategy: {}. Valid: endpoint, direct", s)),
        }
    }
}

/// Widget Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub quote_source: QuoteStrategy,
    /// Per-attempt timeout for quote fetches
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            quote_source: QuoteStrategy::default(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set the server base URL
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim().trim_end_matches('/').to_string();
    }

    /// Base URL after applying the environment override
    pub fn effective_base_url(&self) -> String {
        Self::pick_base_url(std::env::var(BASE_URL_ENV).ok(), &self.base_url)
    }

    fn pick_base_url(env_value: Option<String>, configured: &str) -> String {
        env_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| configured.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("quote_source = \"direct\"\n").unwrap();
        assert_eq!(config.quote_source, QuoteStrategy::Direct);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout(), Duration::from_millis(3000));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.set_base_url("https://quotes.example/ ");

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.base_url, "https://quotes.example");
        assert_eq!(parsed.quote_source, QuoteStrategy::Endpoint);
    }

    #[test]
    fn test_env_override_wins_when_set() {
        assert_eq!(
            Config::pick_base_url(Some("http://env:9000".to_string()), "http://file"),
            "http://env:9000"
        );
        assert_eq!(
            Config::pick_base_url(Some("  ".to_string()), "http://file"),
            "http://file"
        );
        assert_eq!(Config::pick_base_url(None, "http://file"), "http://file");
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Direct".parse::<QuoteStrategy>(), Ok(QuoteStrategy::Direct));
        assert!("proxy".parse::<QuoteStrategy>().is_err());
    }
}
