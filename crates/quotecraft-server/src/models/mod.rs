//! Quotecraft API Models
//!
//! - Transform: request/response bodies for the style rewrite endpoint
//! - Error: JSON error body shared by every route

mod error;
mod transform;

pub use error::*;
pub use transform::*;
