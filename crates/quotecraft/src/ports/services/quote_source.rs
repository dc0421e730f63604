//! Quote Source Port
//!
//! One link of a fallback chain.

use async_trait::async_trait;

use crate::domain::entities::Quote;
use crate::domain::errors::DomainError;

/// Service interface for fetching a single random quote
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Name used in logs (e.g., "stoic", "zenquotes")
    fn name(&self) -> &str;

    /// Fetch one quote. Any error sends the chain to the next source.
    async fn fetch_quote(&self) -> Result<Quote, DomainError>;
}
