use super::Language;

/// A single translation submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_lang: Language,
    pub target_lang: Language,
}

impl TranslationRequest {
    pub fn new(source_text: impl Into<String>, source_lang: Language, target_lang: Language) -> Self {
        Self {
            source_text: source_text.into(),
            source_lang,
            target_lang,
        }
    }

    /// The text actually sent upstream.
    pub fn trimmed_text(&self) -> &str {
        self.source_text.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed_text().is_empty()
    }
}

/// Successful outcome of a translation request.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub elapsed_seconds: f64,
}

/// Failed outcome of a translation request.
///
/// The `Display` form is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("No text to translate")]
    EmptyInput,

    #[error("Translation service unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Translation service error: {0}")]
    ProviderError(String),
}

impl TranslationError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            Self::ProviderUnavailable(err.to_string())
        } else {
            Self::ProviderError(err.to_string())
        }
    }
}
