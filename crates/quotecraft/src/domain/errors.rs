//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    /// Classify a reqwest failure for the given source
    pub fn from_request<T: AsRef<str>>(source: T, err: reqwest::Error) -> Self {
        let source = source.as_ref();
        if err.is_timeout() {
            Self::Timeout(format!("{source}: {err}"))
        } else if err.is_decode() {
            Self::Parse(format!("{source}: {err}"))
        } else {
            Self::ExternalService(format!("{source}: {err}"))
        }
    }
}
