//! Service Ports
//!
//! Abstract interfaces for external services.

mod llm_provider;
mod quote_source;
mod style_transformer;

pub use llm_provider::*;
pub use quote_source::*;
pub use style_transformer::*;
