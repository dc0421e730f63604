//! Quote - The thing being displayed and rewritten
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author used when a provider omits one
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Quote - Content and its attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    /// The quoted text
    pub content: String,
    /// Who said it
    pub author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }

    /// Build a quote from raw provider fields.
    ///
    /// Returns `None` when the content is missing or blank. A missing or
    /// blank author becomes [`UNKNOWN_AUTHOR`].
    pub fn normalized(content: Option<&str>, author: Option<&str>) -> Option<Self> {
        let content = content.map(str::trim).filter(|c| !c.is_empty())?;
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR);

        Some(Self::new(content, author))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.content, self.author)
    }
}
