//! Quotecraft Domain Library
//!
//! Core types and interfaces shared by the Quotecraft server and widget.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure types and static configuration
//!   - `entities/`: Quote, StyleConfig
//!   - `value_objects/`: Immutable value types (QuoteProvider)
//!   - `styles`, `fallback`: Built-in style catalogue and local fallback quotes
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: Quote sources, LLM providers, style transformers
//!
//! - **Services** (`services/`): Domain logic built on the ports
//!   (the quote fallback chain, the LLM-backed style transformer)
//!
//! - **Adapters** (`adapters/`): HTTP implementations of the ports
//!
//! # Usage
//!
//! ```rust,ignore
//! use quotecraft::{QuoteChain, HttpQuoteSource, server_fallback_quotes};
//!
//! let chain = QuoteChain::new(sources, server_fallback_quotes())?;
//! let fetched = chain.fetch().await;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use adapters::{
    build_llm_client, build_quote_client, default_server_sources, widget_direct_sources,
    EndpointTransformer, HttpQuoteSource, OpenAiProvider, QuoteClientConfig, DEFAULT_LLM_TIMEOUT,
    TRANSFORM_QUOTE_PATH,
};
pub use domain::{
    builtin_styles, find_style, pick_random, server_fallback_quotes, widget_fallback_quotes,
    DomainError, Quote, QuoteProvider, StyleConfig, GET_QUOTE_PATH,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionResponse, LlmProvider, MessageRole, QuoteSource,
    StyleTransformer,
};
pub use services::{FetchedQuote, LlmStyleTransformer, QuoteChain, QuoteOrigin};
