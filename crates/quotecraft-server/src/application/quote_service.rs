//! Quote Application Service (Use Case)

use quotecraft::{FetchedQuote, QuoteChain};

/// Application service behind `GET /api/get-quote`
pub struct QuoteService {
    chain: QuoteChain,
}

impl QuoteService {
    pub fn new(chain: QuoteChain) -> Self {
        Self { chain }
    }

    /// A random quote from the first healthy provider, or a local one
    pub async fn random_quote(&self) -> FetchedQuote {
        self.chain.fetch().await
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.chain.source_names()
    }
}
