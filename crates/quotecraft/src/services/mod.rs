//! Domain Services
//!
//! Logic composed from the ports: the quote fallback chain and the
//! LLM-backed style transformer.

mod llm_style;
mod quote_chain;

pub use llm_style::*;
pub use quote_chain::*;
