//! Built-in style catalogue
//!
//! Keys are stable identifiers used by the widget and its CLI flags.

use super::entities::StyleConfig;

/// Catalogue entries in display order: (key, name, system prompt, css class)
const BUILTIN_STYLES: &[(&str, &str, &str, Option<&str>)] = &[
    (
        "unhinged",
        "Unhinged",
        "Take this quote and make it completely unhinged and absurd while keeping the core meaning. Add wild exaggerations and surreal elements.",
        None,
    ),
    (
        "sarcastic",
        "Sarcastic",
        "Rewrite this quote in a deeply sarcastic tone, dripping with irony and faux inspiration.",
        None,
    ),
    (
        "pirate",
        "Pirate",
        "You are a salty pirate captain. Respond with nautical jargon, curses, and threats to make people walk the plank.",
        None,
    ),
    (
        "shakespeare",
        "Shakespeare",
        "You are William Shakespeare. Respond in iambic pentameter with elaborate metaphors and archaic language.",
        None,
    ),
    (
        "cowboy",
        "Cowboy",
        "You are a grizzled old cowboy. Respond with drawling western slang and references to tumbleweeds.",
        None,
    ),
    (
        "robot",
        "Robot",
        "You are a highly logical AI. Respond with precise technical language and emotionless analysis.",
        None,
    ),
    (
        "valleyGirl",
        "Valley Girl",
        "You are a 90s valley girl. Respond with like, totally exaggerated speech and, oh my god, so many slang terms.",
        None,
    ),
    (
        "aliAbdaal",
        "Ali Abdaal",
        "You are Ali Abdaal, the cheerful British doctor-turned-productivity-YouTuber. You are relatable. You speak in a warm, conversational tone, often drawing from personal experience. You gently motivate the audience with practical, evidence-backed advice, often using storytelling, relatable analogies, and phrases like 'to be fair', 'if I'm honest', 'this is game-changing', and 'it's mad, really'. Use British spelling and end with a light encouragement or a question to keep the vibe friendly and open-ended. Sprinkle in a few emojis for warmth 😊💡✨. Extend on the quote when necessary",
        Some("ali-style"),
    ),
    (
        "conspiracyTheorist",
        "Conspiracy Theorist",
        "You see hidden meanings in everything. Respond with wild speculation about government cover-ups and secret societies.",
        Some("conspiracy-style"),
    ),
    (
        "medievalBard",
        "Medieval Bard",
        "You are a traveling minstrel from the Middle Ages. Respond in flowery old English with dramatic flair.",
        Some("medieval-style"),
    ),
    (
        "genZInfluencer",
        "Gen Z Influencer",
        "You're a teenage TikTok star. Respond with slang, abbreviations, and excessive emojis.",
        Some("genz-style"),
    ),
];

fn to_style(name: &str, prompt: &str, css_class: Option<&str>) -> StyleConfig {
    let style = StyleConfig::new(name, prompt);
    match css_class {
        Some(class) => style.with_css_class(class),
        None => style,
    }
}

/// All built-in styles, in display order
pub fn builtin_styles() -> Vec<(&'static str, StyleConfig)> {
    BUILTIN_STYLES
        .iter()
        .map(|(key, name, prompt, css_class)| (*key, to_style(name, prompt, *css_class)))
        .collect()
}

/// Look up a style by key.
///
/// Exact matches win; otherwise the first case-insensitive match is used.
pub fn find_style(key: &str) -> Option<StyleConfig> {
    let key = key.trim();
    BUILTIN_STYLES
        .iter()
        .find(|(k, ..)| *k == key)
        .or_else(|| BUILTIN_STYLES.iter().find(|(k, ..)| k.eq_ignore_ascii_case(key)))
        .map(|(_, name, prompt, css_class)| to_style(name, prompt, *css_class))
}
