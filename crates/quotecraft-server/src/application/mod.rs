//! Application Layer (Use Cases)
//!
//! Orchestrates domain services for the HTTP routes.

mod quote_service;
mod transform_service;

pub use quote_service::QuoteService;
pub use transform_service::TransformService;
