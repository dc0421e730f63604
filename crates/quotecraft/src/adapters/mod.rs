//! Infrastructure Adapters
//!
//! HTTP implementations of the ports using reqwest.

pub mod endpoint;
pub mod http_quote;
pub mod openai;

// Re-exports
pub use endpoint::{EndpointTransformer, TRANSFORM_QUOTE_PATH};
pub use http_quote::{
    build_quote_client, default_server_sources, widget_direct_sources, HttpQuoteSource,
    QuoteClientConfig,
};
pub use openai::{build_llm_client, OpenAiProvider, DEFAULT_LLM_TIMEOUT};
