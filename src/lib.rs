//! # fanyi - English/Chinese translation CLI
//!
//! `fanyi` sends text to a translation service and shows the result,
//! annotating Chinese output with tone-marked pinyin.
//!
//! ## Request lifecycle
//!
//! A [`translation::TranslationRequest`] is submitted to the
//! [`runner::TaskRunner`], which runs the provider call on a bounded pool of
//! background tasks. Exactly one callback, success or failure, later runs on
//! the caller's task, where it updates the [`view::TranslationView`].
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a phrase (English to Chinese by default)
//! fanyi "hi mom!"
//!
//! # Chinese to English from a file
//! fanyi --from zh --to en -f notes.txt
//!
//! # Interactive session
//! fanyi session
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/fanyi/config.toml`:
//!
//! ```toml
//! [fanyi]
//! provider = "ollama"
//! to = "zh"
//! show_pinyin = true
//!
//! [providers.ollama]
//! kind = "openai"
//! endpoint = "http://localhost:11434"
//! model = "gemma3:12b"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from inline text, files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Background execution of translation requests.
pub mod runner;

/// Interactive translation session.
pub mod session;

/// Translation providers and the adapter in front of them.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

/// Presentation state and pinyin annotation.
pub mod view;
