//! Language codes understood by the translator.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ui::Style;

/// One of the two languages the translator routes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

/// Supported language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(Language, &str)] = &[
    (Language::En, "English"),
    (Language::Zh, "Chinese (Simplified)"),
];

impl Language {
    /// Returns the short code (`en`, `zh`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Returns the English name used in prompts and listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "Chinese (Simplified)",
        }
    }

    /// Returns the other language of the pair.
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    pub const fn is_chinese(self) -> bool {
        matches!(self, Self::Zh)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => anyhow::bail!(
                "Invalid language code: '{s}'\n\n\
                 Valid language codes: en, zh\n\
                 Run 'fanyi languages' to see all supported codes."
            ),
        }
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for (lang, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(lang.code()), Style::secondary(name));
    }
}

/// Validates that the given language code is supported.
pub fn validate_language(lang: &str) -> Result<Language> {
    lang.parse()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert_eq!(validate_language("en").unwrap(), Language::En);
        assert_eq!(validate_language("zh").unwrap(), Language::Zh);
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("ja").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("ZH").is_err()); // Case sensitive
        assert!(validate_language("zh-TW").is_err());
    }

    #[test]
    fn test_other_swaps_pair() {
        assert_eq!(Language::En.other(), Language::Zh);
        assert_eq!(Language::Zh.other(), Language::En);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        #[derive(Deserialize)]
        struct Wrapper {
            lang: Language,
        }

        let parsed: Wrapper = toml::from_str("lang = \"zh\"").unwrap();
        assert_eq!(parsed.lang, Language::Zh);
        assert_eq!(Language::En.to_string(), "en");
    }
}
