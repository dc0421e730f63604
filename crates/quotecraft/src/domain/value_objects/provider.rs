//! QuoteProvider - Known quote APIs and their response shapes

use serde_json::Value;

use crate::domain::entities::Quote;

const QUOTABLE_URL: &str = "https://api.quotable.io/random";
const ALLORIGINS_RAW: &str = "https://api.allorigins.win/raw?url=";

/// Path of the quote endpoint relative to the server base URL
pub const GET_QUOTE_PATH: &str = "/api/get-quote";

/// Quote provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteProvider {
    /// stoic-quotes.com: `{text, author}`
    Stoic,
    /// zenquotes.io: `[{q, a}]`
    ZenQuotes,
    /// forismatic.com: `{quoteText, quoteAuthor}`
    Forismatic,
    /// quotable.io over plain HTTP: `{content, author}`
    Quotable,
    /// quotable.io through the allorigins CORS proxy
    QuotableProxy,
    /// Our own quote endpoint: `{content, author}`
    Endpoint,
}

impl QuoteProvider {
    /// Default URL for the provider.
    ///
    /// `Endpoint` has no fixed host and returns only the path.
    pub fn default_url(&self) -> String {
        match self {
            QuoteProvider::Stoic => "https://stoic-quotes.com/api/quote".to_string(),
            QuoteProvider::ZenQuotes => "https://zenquotes.io/api/random".to_string(),
            QuoteProvider::Forismatic => {
                "https://api.forismatic.com/api/1.0/?method=getQuote&format=json&lang=en"
                    .to_string()
            }
            QuoteProvider::Quotable => "http://api.quotable.io/random".to_string(),
            QuoteProvider::QuotableProxy => {
                format!("{}{}", ALLORIGINS_RAW, urlencoding::encode(QUOTABLE_URL))
            }
            QuoteProvider::Endpoint => GET_QUOTE_PATH.to_string(),
        }
    }

    /// Normalize a provider payload into a Quote
    pub fn normalize(&self, payload: &Value) -> Option<Quote> {
        let field = |obj: &Value, key: &str| {
            obj.get(key)
                .and_then(|v| v.as_str())
                .map(str::to_owned)
        };

        let (content, author) = match self {
            QuoteProvider::Stoic => (field(payload, "text"), field(payload, "author")),
            QuoteProvider::ZenQuotes => {
                let first = payload.as_array()?.first()?;
                (field(first, "q"), field(first, "a"))
            }
            QuoteProvider::Forismatic => {
                (field(payload, "quoteText"), field(payload, "quoteAuthor"))
            }
            QuoteProvider::Quotable | QuoteProvider::QuotableProxy | QuoteProvider::Endpoint => {
                (field(payload, "content"), field(payload, "author"))
            }
        };

        Quote::normalized(content.as_deref(), author.as_deref())
    }
}

impl std::fmt::Display for QuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteProvider::Stoic => write!(f, "stoic"),
            QuoteProvider::ZenQuotes => write!(f, "zenquotes"),
            QuoteProvider::Forismatic => write!(f, "forismatic"),
            QuoteProvider::Quotable => write!(f, "quotable"),
            QuoteProvider::QuotableProxy => write!(f, "quotable-proxy"),
            QuoteProvider::Endpoint => write!(f, "endpoint"),
        }
    }
}

impl std::str::FromStr for QuoteProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stoic" => Ok(QuoteProvider::Stoic),
            "zenquotes" | "zen" => Ok(QuoteProvider::ZenQuotes),
            "forismatic" => Ok(QuoteProvider::Forismatic),
            "quotable" => Ok(QuoteProvider::Quotable),
            "quotable-proxy" => Ok(QuoteProvider::QuotableProxy),
            "endpoint" => Ok(QuoteProvider::Endpoint),
            _ => Err(format!("Unknown quote provider: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_stoic() {
        let quote = QuoteProvider::Stoic
            .normalize(&json!({"text": "Waste no more time.", "author": "Marcus Aurelius", "id": 7}))
            .unwrap();
        assert_eq!(quote, Quote::new("Waste no more time.", "Marcus Aurelius"));
    }

    #[test]
    fn test_normalize_zenquotes_uses_first_entry() {
        let payload = json!([
            {"q": "First.", "a": "One", "h": "<blockquote>"},
            {"q": "Second.", "a": "Two"}
        ]);
        let quote = QuoteProvider::ZenQuotes.normalize(&payload).unwrap();
        assert_eq!(quote, Quote::new("First.", "One"));
    }

    #[test]
    fn test_normalize_zenquotes_rejects_empty_array() {
        assert!(QuoteProvider::ZenQuotes.normalize(&json!([])).is_none());
        assert!(QuoteProvider::ZenQuotes
            .normalize(&json!({"q": "not an array"}))
            .is_none());
    }

    #[test]
    fn test_normalize_forismatic_blank_author() {
        let payload = json!({"quoteText": "Act well your part. ", "quoteAuthor": ""});
        let quote = QuoteProvider::Forismatic.normalize(&payload).unwrap();
        assert_eq!(quote, Quote::new("Act well your part.", "Unknown"));
    }

    #[test]
    fn test_normalize_content_shape() {
        let payload = json!({"_id": "x", "content": "Keep going.", "author": "Anon"});
        for provider in [
            QuoteProvider::Quotable,
            QuoteProvider::QuotableProxy,
            QuoteProvider::Endpoint,
        ] {
            assert_eq!(
                provider.normalize(&payload),
                Some(Quote::new("Keep going.", "Anon"))
            );
        }
    }

    #[test]
    fn test_normalize_wrong_shape_fails() {
        let payload = json!({"content": "Keep going.", "author": "Anon"});
        assert!(QuoteProvider::Stoic.normalize(&payload).is_none());
    }

    #[test]
    fn test_proxy_url_encodes_target() {
        assert_eq!(
            QuoteProvider::QuotableProxy.default_url(),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fapi.quotable.io%2Frandom"
        );
    }

    #[test]
    fn test_display_from_str() {
        for provider in [
            QuoteProvider::Stoic,
            QuoteProvider::ZenQuotes,
            QuoteProvider::Forismatic,
            QuoteProvider::Quotable,
            QuoteProvider::QuotableProxy,
            QuoteProvider::Endpoint,
        ] {
            assert_eq!(provider.to_string().parse::<QuoteProvider>(), Ok(provider));
        }
        assert!("stoa".parse::<QuoteProvider>().is_err());
    }
}
