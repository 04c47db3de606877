//! Interactive translation session.
//!
//! A REPL-style surface with slash commands. Lines of text are submitted to
//! the background runner; outcomes are rendered when their callbacks run.

/// Slash command parsing.
pub mod command;
mod repl;
mod ui;

pub use repl::TranslationSession;
