//! Local fallback quotes
//!
//! Used when every remote source in a chain has failed.

use rand::seq::SliceRandom;

use super::entities::Quote;

const SERVER_FALLBACK: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    ("In the middle of difficulty lies opportunity.", "Albert Einstein"),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
];

const WIDGET_FALLBACK: &[(&str, &str)] = &[
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    ("The best way to predict the future is to invent it.", "Alan Kay"),
    (
        "Code is like humor. When you have to explain it, it's bad.",
        "Cory House",
    ),
];

fn to_quotes(list: &[(&str, &str)]) -> Vec<Quote> {
    list.iter()
        .map(|(content, author)| Quote::new(*content, *author))
        .collect()
}

/// Fallback list served by the quote endpoint
pub fn server_fallback_quotes() -> Vec<Quote> {
    to_quotes(SERVER_FALLBACK)
}

/// Fallback list shown by the widget
pub fn widget_fallback_quotes() -> Vec<Quote> {
    to_quotes(WIDGET_FALLBACK)
}

/// Uniformly random element, `None` for an empty list
pub fn pick_random(quotes: &[Quote]) -> Option<&Quote> {
    quotes.choose(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_populated() {
        assert_eq!(server_fallback_quotes().len(), 3);
        assert_eq!(widget_fallback_quotes().len(), 3);
        assert_eq!(widget_fallback_quotes()[1].author, "Alan Kay");
    }

    #[test]
    fn test_pick_random_returns_member() {
        let quotes = server_fallback_quotes();
        for _ in 0..20 {
            let picked = pick_random(&quotes).unwrap();
            assert!(quotes.contains(picked));
        }
    }

    #[test]
    fn test_pick_random_empty() {
        assert!(pick_random(&[]).is_none());
    }
}
