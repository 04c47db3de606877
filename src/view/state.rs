use std::fmt;

use super::pinyin;
use crate::runner::RequestId;
use crate::translation::{Language, TranslationError, TranslationResult};

/// The status line shown beneath the translation panes.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    Translating,
    Completed { elapsed_seconds: f64 },
    Failed(String),
    Cleared,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::Translating => write!(f, "Translating..."),
            Self::Completed { elapsed_seconds } => {
                write!(f, "Translation completed in {elapsed_seconds:.2} seconds")
            }
            Self::Failed(message) => write!(f, "Error: {message}"),
            Self::Cleared => write!(f, "All text cleared"),
        }
    }
}

/// Presentation state for one translation surface.
///
/// Only the UI context mutates this, through runner callbacks and user
/// commands. Renderers read it and never write.
#[derive(Debug, Clone)]
pub struct TranslationView {
    source_lang: Language,
    target_lang: Language,
    source_text: String,
    translated_text: String,
    pinyin: String,
    show_pinyin: bool,
    discard_stale: bool,
    status: Status,
    char_count: usize,
    word_count: usize,
    translation_count: usize,
    last_elapsed: f64,
    last_shown: Option<RequestId>,
}

impl TranslationView {
    pub fn new(source_lang: Language, target_lang: Language, show_pinyin: bool) -> Self {
        Self {
            source_lang,
            target_lang,
            source_text: String::new(),
            translated_text: String::new(),
            pinyin: String::new(),
            show_pinyin,
            discard_stale: false,
            status: Status::Ready,
            char_count: 0,
            word_count: 0,
            translation_count: 0,
            last_elapsed: 0.0,
            last_shown: None,
        }
    }

    /// Ignore outcomes older than the newest one already shown.
    #[must_use]
    pub const fn with_discard_stale(mut self, discard_stale: bool) -> Self {
        self.discard_stale = discard_stale;
        self
    }

    pub const fn source_lang(&self) -> Language {
        self.source_lang
    }

    pub const fn target_lang(&self) -> Language {
        self.target_lang
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// Pinyin for the Chinese side, empty when hidden or not applicable.
    pub fn pinyin(&self) -> &str {
        if self.show_pinyin { &self.pinyin } else { "" }
    }

    pub const fn show_pinyin(&self) -> bool {
        self.show_pinyin
    }

    pub const fn discard_stale(&self) -> bool {
        self.discard_stale
    }

    pub const fn status(&self) -> &Status {
        &self.status
    }

    pub const fn char_count(&self) -> usize {
        self.char_count
    }

    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    pub const fn translation_count(&self) -> usize {
        self.translation_count
    }

    /// `Last translation: 0.00s` style summary of the most recent success.
    pub fn last_translation_line(&self) -> String {
        format!("Last translation: {:.2}s", self.last_elapsed)
    }

    /// Replaces the source text and refreshes the counts.
    pub fn set_source(&mut self, text: &str) {
        self.source_text = text.trim().to_string();
        self.refresh_counts();
    }

    /// Marks a request as in flight.
    pub fn begin(&mut self) {
        self.status = Status::Translating;
    }

    pub const fn set_source_lang(&mut self, lang: Language) {
        self.source_lang = lang;
    }

    pub const fn set_target_lang(&mut self, lang: Language) {
        self.target_lang = lang;
    }

    /// Shows a successful outcome. Returns false if it was discarded as stale.
    ///
    /// `target_lang` is the language the request asked for, which may differ
    /// from the current target if the user changed it while it was in flight.
    pub fn apply_success(
        &mut self,
        id: RequestId,
        target_lang: Language,
        result: &TranslationResult,
    ) -> bool {
        if self.is_stale(id) {
            tracing::debug!(id, "discarding stale translation");
            return false;
        }
        self.last_shown = Some(id);

        self.translated_text.clone_from(&result.translated_text);
        self.pinyin = if target_lang.is_chinese() {
            pinyin::annotate(&self.translated_text)
        } else {
            String::new()
        };

        self.translation_count += 1;
        self.last_elapsed = result.elapsed_seconds;
        self.status = Status::Completed {
            elapsed_seconds: result.elapsed_seconds,
        };
        true
    }

    /// Shows a failure in the status line. The previous translation stays.
    pub fn apply_failure(&mut self, id: RequestId, error: &TranslationError) -> bool {
        if self.is_stale(id) {
            tracing::debug!(id, "discarding stale failure");
            return false;
        }
        self.last_shown = Some(id);
        self.status = Status::Failed(error.message());
        true
    }

    /// Exchanges languages and texts, then recomputes pinyin for whichever
    /// side is now Chinese.
    pub fn swap_languages(&mut self) {
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);

        self.pinyin = if self.target_lang.is_chinese() {
            pinyin::annotate(&self.translated_text)
        } else if self.source_lang.is_chinese() {
            pinyin::annotate(&self.source_text)
        } else {
            String::new()
        };

        self.refresh_counts();
    }

    /// Flips pinyin visibility and returns the new setting.
    pub fn toggle_pinyin(&mut self) -> bool {
        self.set_show_pinyin(!self.show_pinyin);
        self.show_pinyin
    }

    pub fn set_show_pinyin(&mut self, show: bool) {
        self.show_pinyin = show;
        if show && self.target_lang.is_chinese() && !self.translated_text.is_empty() {
            self.pinyin = pinyin::annotate(&self.translated_text);
        }
    }

    /// Empties every pane and resets the counts.
    pub fn clear(&mut self) {
        self.source_text.clear();
        self.translated_text.clear();
        self.pinyin.clear();
        self.refresh_counts();
        self.status = Status::Cleared;
    }

    fn is_stale(&self, id: RequestId) -> bool {
        self.discard_stale && self.last_shown.is_some_and(|shown| id < shown)
    }

    fn refresh_counts(&mut self) {
        self.char_count = self.source_text.chars().count();
        self.word_count = self.source_text.split_whitespace().count();
    }
}
