//! HTTP Quote Source
//!
//! Fetches a quote from one provider URL and normalizes the response shape.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::{DomainError, Quote, QuoteProvider};
use crate::ports::QuoteSource;

/// Per-attempt timeout used by the quote endpoint
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_millis(3000);

/// Settings for the shared quote HTTP client
#[derive(Debug, Clone)]
pub struct QuoteClientConfig {
    /// Timeout for a single attempt
    pub timeout: Duration,
    /// Skip TLS certificate validation (some providers serve broken chains)
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl Default for QuoteClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_QUOTE_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: format!("quotecraft/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build the HTTP client shared by every source of a chain
pub fn build_quote_client(config: &QuoteClientConfig) -> Result<Client, DomainError> {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
        .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// QuoteSource that GETs a provider URL
pub struct HttpQuoteSource {
    client: Client,
    provider: QuoteProvider,
    url: String,
    name: String,
}

impl HttpQuoteSource {
    /// Source for a provider at an explicit URL
    pub fn new(client: Client, provider: QuoteProvider, url: impl Into<String>) -> Self {
        Self {
            client,
            provider,
            url: url.into(),
            name: provider.to_string(),
        }
    }

    /// Source for a provider at its default URL
    pub fn with_default_url(client: Client, provider: QuoteProvider) -> Self {
        let url = provider.default_url();
        Self::new(client, provider, url)
    }

    /// Source for our own quote endpoint under `base_url`
    pub fn endpoint(client: Client, base_url: &str) -> Self {
        let url = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            QuoteProvider::Endpoint.default_url()
        );
        Self::new(client, QuoteProvider::Endpoint, url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_quote(&self) -> Result<Quote, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::from_request(&self.name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::ExternalService(format!(
                "{} responded with {}",
                self.name, status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DomainError::from_request(&self.name, e))?;

        self.provider.normalize(&payload).ok_or_else(|| {
            DomainError::Parse(format!("{} returned an unexpected payload", self.name))
        })
    }
}

fn sources_for(client: &Client, providers: &[QuoteProvider]) -> Vec<Arc<dyn QuoteSource>> {
    providers
        .iter()
        .map(|p| {
            Arc::new(HttpQuoteSource::with_default_url(client.clone(), *p)) as Arc<dyn QuoteSource>
        })
        .collect()
}

/// The quote endpoint's chain: stoic, zenquotes, forismatic
pub fn default_server_sources(client: &Client) -> Vec<Arc<dyn QuoteSource>> {
    sources_for(
        client,
        &[
            QuoteProvider::Stoic,
            QuoteProvider::ZenQuotes,
            QuoteProvider::Forismatic,
        ],
    )
}

/// The widget's direct strategies: plain HTTP, CORS proxy, alternative API
pub fn widget_direct_sources(client: &Client) -> Vec<Arc<dyn QuoteSource>> {
    sources_for(
        client,
        &[
            QuoteProvider::Quotable,
            QuoteProvider::QuotableProxy,
            QuoteProvider::ZenQuotes,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        build_quote_client(&QuoteClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_normalizes_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/random")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"q":"Well begun is half done.","a":"Aristotle"}]"#)
            .create_async()
            .await;

        let source = HttpQuoteSource::new(
            client(),
            QuoteProvider::ZenQuotes,
            format!("{}/api/random", server.url()),
        );
        let quote = source.fetch_quote().await.unwrap();

        assert_eq!(quote, Quote::new("Well begun is half done.", "Aristotle"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/quote")
            .with_status(503)
            .create_async()
            .await;

        let source = HttpQuoteSource::new(
            client(),
            QuoteProvider::Stoic,
            format!("{}/api/quote", server.url()),
        );
        let err = source.fetch_quote().await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/quote")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let source = HttpQuoteSource::new(
            client(),
            QuoteProvider::Stoic,
            format!("{}/api/quote", server.url()),
        );
        let err = source.fetch_quote().await.unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[tokio::test]
    async fn test_silent_provider_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = build_quote_client(&QuoteClientConfig {
            timeout: Duration::from_millis(150),
            ..QuoteClientConfig::default()
        })
        .unwrap();
        let source = HttpQuoteSource::new(
            client,
            QuoteProvider::Stoic,
            format!("http://{addr}/api/quote"),
        );

        let err = source.fetch_quote().await.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/quote")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"rate limited"}"#)
            .create_async()
            .await;

        let source = HttpQuoteSource::new(
            client(),
            QuoteProvider::Stoic,
            format!("{}/api/quote", server.url()),
        );
        let err = source.fetch_quote().await.unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let source = HttpQuoteSource::endpoint(client(), "http://localhost:8000/");
        assert_eq!(source.url(), "http://localhost:8000/api/get-quote");
        assert_eq!(source.name(), "endpoint");
    }

    #[test]
    fn test_default_chains_order() {
        let names: Vec<String> = default_server_sources(&client())
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["stoic", "zenquotes", "forismatic"]);

        let names: Vec<String> = widget_direct_sources(&client())
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["quotable", "quotable-proxy", "zenquotes"]);
    }
}
