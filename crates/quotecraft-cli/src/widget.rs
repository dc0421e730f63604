//! Widget session
//!
//! Holds the displayed quote and the one-transformation allowance.
//! Rendering lives in main.rs; this module only decides what to show.

use std::sync::Arc;

use quotecraft::{pick_random, FetchedQuote, Quote, QuoteChain, StyleConfig, StyleTransformer};

/// Successful transformations allowed per session
pub const FREE_TRANSFORMS: u32 = 1;

/// What the widget should render after a transform attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// Rewritten text and the style's presentation class
    Transformed {
        text: String,
        css_class: Option<String>,
        /// The allowance is now used up
        locked: bool,
    },
    /// The attempt failed; a fallback quote is shown instead
    Failed { message: String },
    /// The allowance was already used up; nothing was sent
    Locked,
}

pub struct Widget {
    chain: QuoteChain,
    transformer: Arc<dyn StyleTransformer>,
    fallback: Vec<Quote>,
    original_quote: Option<String>,
    transformed_count: u32,
}

impl Widget {
    pub fn new(
        chain: QuoteChain,
        transformer: Arc<dyn StyleTransformer>,
        fallback: Vec<Quote>,
    ) -> Self {
        Self {
            chain,
            transformer,
            fallback,
            original_quote: None,
            transformed_count: 0,
        }
    }

    /// Fetch a quote and make it the one being transformed
    pub async fn load_quote(&mut self) -> FetchedQuote {
        let fetched = self.chain.fetch().await;
        self.original_quote = Some(fetched.quote.to_string());
        fetched
    }

    /// Use caller-provided text instead of fetching
    pub fn set_quote(&mut self, text: impl Into<String>) {
        self.original_quote = Some(text.into());
    }

    pub fn original_quote(&self) -> Option<&str> {
        self.original_quote.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.transformed_count >= FREE_TRANSFORMS
    }

    /// Transform the current quote, loading one first if needed
    pub async fn transform(&mut self, style: &StyleConfig) -> TransformOutcome {
        if self.is_locked() {
            return TransformOutcome::Locked;
        }

        if self.original_quote.is_none() {
            self.load_quote().await;
        }
        let quote = self.original_quote.clone().unwrap_or_default();

        match self.transformer.transform(&quote, style).await {
            Ok(text) => {
                self.transformed_count += 1;
                TransformOutcome::Transformed {
                    text,
                    css_class: style.css_class.clone(),
                    locked: self.is_locked(),
                }
            }
            Err(e) => {
                tracing::warn!("Transformation failed: {}", e);
                let fallback = pick_random(&self.fallback)
                    .map(|q| q.to_string())
                    .unwrap_or_default();
                TransformOutcome::Failed {
                    message: format!("Failed to transform. Using fallback quote: {}", fallback),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quotecraft::{widget_fallback_quotes, DomainError, QuoteSource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct OneQuote;

    #[async_trait]
    impl QuoteSource for OneQuote {
        fn name(&self) -> &str {
            "one"
        }

        async fn fetch_quote(&self) -> Result<Quote, DomainError> {
            Ok(Quote::new("Simplicity is prerequisite for reliability.", "Edsger Dijkstra"))
        }
    }

    /// Fails for the first `failures` calls, then succeeds
    struct Flaky {
        failures: usize,
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl Flaky {
        fn new(failures: usize) -> Arc<Self> {
            Arc::new(Self {
                failures,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl StyleTransformer for Flaky {
        async fn transform(&self, quote: &str, style: &StyleConfig) -> Result<String, DomainError> {
            self.seen.lock().unwrap().push(quote.to_string());
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(DomainError::ExternalService("500".to_string()))
            } else {
                Ok(format!("[{}] {}", style.name, quote))
            }
        }
    }

    fn widget(transformer: Arc<dyn StyleTransformer>) -> Widget {
        let sources: Vec<Arc<dyn QuoteSource>> = vec![Arc::new(OneQuote)];
        let chain = QuoteChain::new(sources, widget_fallback_quotes()).unwrap();
        Widget::new(chain, transformer, widget_fallback_quotes())
    }

    fn genz() -> StyleConfig {
        StyleConfig::new("Gen Z Influencer", "You're a teenage TikTok star.")
            .with_css_class("genz-style")
    }

    #[tokio::test]
    async fn test_load_quote_sets_display_text() {
        let mut w = widget(Flaky::new(0));
        w.load_quote().await;
        assert_eq!(
            w.original_quote(),
            Some("Simplicity is prerequisite for reliability. - Edsger Dijkstra")
        );
    }

    #[tokio::test]
    async fn test_single_transform_then_locked() {
        let transformer = Flaky::new(0);
        let mut w = widget(transformer.clone());
        w.load_quote().await;

        let outcome = w.transform(&genz()).await;
        assert_eq!(
            outcome,
            TransformOutcome::Transformed {
                text: "[Gen Z Influencer] Simplicity is prerequisite for reliability. - Edsger Dijkstra"
                    .to_string(),
                css_class: Some("genz-style".to_string()),
                locked: true,
            }
        );
        assert!(w.is_locked());

        assert_eq!(w.transform(&genz()).await, TransformOutcome::Locked);
        assert_eq!(transformer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_allowance() {
        let transformer = Flaky::new(1);
        let mut w = widget(transformer.clone());
        w.set_quote("Hello - World");

        match w.transform(&genz()).await {
            TransformOutcome::Failed { message } => {
                let prefix = "Failed to transform. Using fallback quote: ";
                assert!(message.starts_with(prefix));
                let shown = &message[prefix.len()..];
                assert!(widget_fallback_quotes().iter().any(|q| q.to_string() == shown));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
        assert!(!w.is_locked());

        assert!(matches!(
            w.transform(&genz()).await,
            TransformOutcome::Transformed { locked: true, .. }
        ));
        assert_eq!(
            *transformer.seen.lock().unwrap(),
            vec!["Hello - World".to_string(), "Hello - World".to_string()]
        );
    }

    #[tokio::test]
    async fn test_transform_loads_quote_when_missing() {
        let transformer = Flaky::new(0);
        let mut w = widget(transformer.clone());

        w.transform(&genz()).await;
        assert_eq!(
            transformer.seen.lock().unwrap()[0],
            "Simplicity is prerequisite for reliability. - Edsger Dijkstra"
        );
    }
}
