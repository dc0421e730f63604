//! Domain Entities
//!
//! Plain records without identity or lifecycle.
//! - Quote: A piece of text and its author
//! - StyleConfig: A named rewrite prompt

mod quote;
mod style;

pub use quote::*;
pub use style::*;
