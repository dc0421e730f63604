//! Quote Chain - Ordered fallback over quote sources
//!
//! Sources are tried strictly in order, one at a time. The first success
//! wins; if every source fails the chain returns a random local quote.

use std::sync::Arc;

use crate::domain::{pick_random, DomainError, Quote};
use crate::ports::QuoteSource;

/// Where a fetched quote came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOrigin {
    /// A remote source, by name
    Source(String),
    /// The local fallback list
    Fallback,
}

impl std::fmt::Display for QuoteOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteOrigin::Source(name) => write!(f, "{}", name),
            QuoteOrigin::Fallback => write!(f, "local fallback"),
        }
    }
}

/// Result of running the chain
#[derive(Debug, Clone)]
pub struct FetchedQuote {
    pub quote: Quote,
    pub origin: QuoteOrigin,
}

/// Fallback chain of quote sources
#[derive(Clone)]
pub struct QuoteChain {
    sources: Vec<Arc<dyn QuoteSource>>,
    fallback: Vec<Quote>,
}

impl QuoteChain {
    /// Create a chain. The fallback list must not be empty.
    pub fn new(
        sources: Vec<Arc<dyn QuoteSource>>,
        fallback: Vec<Quote>,
    ) -> Result<Self, DomainError> {
        if fallback.is_empty() {
            return Err(DomainError::Configuration(
                "Quote chain needs at least one fallback quote".to_string(),
            ));
        }

        Ok(Self { sources, fallback })
    }

    /// Names of the remote sources, in order
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Run the chain. Never fails.
    pub async fn fetch(&self) -> FetchedQuote {
        for source in &self.sources {
            match source.fetch_quote().await {
                Ok(quote) => {
                    tracing::debug!("Quote fetched from {}", source.name());
                    return FetchedQuote {
                        quote,
                        origin: QuoteOrigin::Source(source.name().to_string()),
                    };
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch from {}: {}", source.name(), e);
                }
            }
        }

        tracing::info!(
            "All {} quote sources failed, using local fallback",
            self.sources.len()
        );

        // `new` guarantees a non-empty fallback list
        let quote = pick_random(&self.fallback)
            .cloned()
            .unwrap_or_else(|| self.fallback[0].clone());

        FetchedQuote {
            quote,
            origin: QuoteOrigin::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::server_fallback_quotes;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        name: &'static str,
        result: Option<Quote>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok(name: &'static str, content: &str) -> Arc<Self> {
            Arc::new(Self {
                name,
                result: Some(Quote::new(content, name)),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                result: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteSource for StubSource {
        fn name(&self) -> &str {
            self.name
        }

        async fn fetch_quote(&self) -> Result<Quote, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .clone()
                .ok_or_else(|| DomainError::ExternalService(format!("{} is down", self.name)))
        }
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let a = StubSource::failing("a");
        let b = StubSource::ok("b", "from b");
        let c = StubSource::ok("c", "from c");
        let sources: Vec<Arc<dyn QuoteSource>> = vec![a.clone(), b.clone(), c.clone()];
        let chain = QuoteChain::new(sources, server_fallback_quotes()).unwrap();

        let fetched = chain.fetch().await;

        assert_eq!(fetched.quote.content, "from b");
        assert_eq!(fetched.origin, QuoteOrigin::Source("b".to_string()));
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
        assert_eq!(c.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_failing_uses_fallback() {
        let sources: Vec<Arc<dyn QuoteSource>> = vec![
            StubSource::failing("stoic"),
            StubSource::failing("zenquotes"),
            StubSource::failing("forismatic"),
        ];
        let fallback = server_fallback_quotes();
        let chain = QuoteChain::new(sources, fallback.clone()).unwrap();

        let fetched = chain.fetch().await;

        assert_eq!(fetched.origin, QuoteOrigin::Fallback);
        assert!(fallback.contains(&fetched.quote));
    }

    #[tokio::test]
    async fn test_empty_chain_uses_fallback() {
        let fallback = vec![Quote::new("Only one.", "Solo")];
        let chain = QuoteChain::new(vec![], fallback).unwrap();

        let fetched = chain.fetch().await;
        assert_eq!(fetched.quote, Quote::new("Only one.", "Solo"));
        assert_eq!(fetched.origin.to_string(), "local fallback");
    }

    #[test]
    fn test_empty_fallback_rejected() {
        let sources: Vec<Arc<dyn QuoteSource>> = vec![StubSource::ok("a", "x")];
        let result = QuoteChain::new(sources, vec![]);
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_source_names_in_order() {
        let sources: Vec<Arc<dyn QuoteSource>> =
            vec![StubSource::ok("first", "x"), StubSource::failing("second")];
        let chain = QuoteChain::new(sources, server_fallback_quotes()).unwrap();
        assert_eq!(chain.source_names(), vec!["first", "second"]);
    }
}
