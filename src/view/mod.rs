//! Presentation state updated by runner callbacks on the UI context.

pub mod pinyin;
mod state;

pub use state::{Status, TranslationView};
