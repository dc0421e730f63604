//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, value objects, static catalogues, and errors.

pub mod entities;
pub mod errors;
pub mod fallback;
pub mod styles;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use fallback::*;
pub use styles::*;
pub use value_objects::*;
