//! Terminal themes for styled results
//!
//! A style's css class picks the colour its result is printed in.

use colored::{ColoredString, Colorize};

/// Render text in the theme for `css_class`
pub fn paint(text: &str, css_class: Option<&str>) -> ColoredString {
    match css_class {
        Some("ali-style") => text.yellow(),
        Some("conspiracy-style") => text.green().bold(),
        Some("medieval-style") => text.magenta().italic(),
        Some("genz-style") => text.cyan().bold(),
        _ => text.normal(),
    }
}

/// Short label for listings
pub fn label(css_class: Option<&str>) -> &'static str {
    match css_class {
        Some("ali-style") => "warm",
        Some("conspiracy-style") => "terminal green",
        Some("medieval-style") => "illuminated",
        Some("genz-style") => "neon",
        Some(_) => "custom",
        None => "plain",
    }
}
