//! Semantic color helpers built on owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for the semantic elements of terminal output.
///
/// Every helper degrades to plain text when colors are disabled.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, colored: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            colored(&text)
        }
    }

    /// Section headers ("Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.bold().to_string())
    }

    /// Labels and keys ("provider", "from")
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.cyan().to_string())
    }

    /// Endpoints, descriptions, timings
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.yellow().to_string())
    }

    /// Slash commands ("/swap", "/help")
    pub fn command<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.green().to_string())
    }

    pub fn code<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.yellow().to_string())
    }

    /// Pinyin line under a Chinese translation
    pub fn pinyin<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.italic().to_string())
    }

    /// Usage hints under headers and prompts
    pub fn hint<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().italic().to_string())
    }

    pub fn default_marker() -> String {
        Self::secondary("(default)")
    }

    pub fn version<T: Display>(text: T) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_keep_text() {
        for painted in [
            Style::hint("Type /help for commands"),
            Style::header("Type /help for commands"),
            Style::pinyin("Type /help for commands"),
        ] {
            assert!(painted.contains("Type /help for commands"));
        }
        assert!(Style::default_marker().contains("(default)"));
    }
}
