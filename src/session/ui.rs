//! Session rendering. Reads the view, never writes it.

use crate::config::ResolvedConfig;
use crate::translation::Language;
use crate::ui::Style;
use crate::view::TranslationView;

use super::command::SLASH_COMMANDS;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(view: &TranslationView) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("fanyi"),
        Style::version(format!("v{VERSION}"))
    );
    print_direction(view.source_lang(), view.target_lang());
    println!(
        "{}",
        Style::hint("Type text to translate, /help for commands, /quit to exit")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_direction(from: Language, to: Language) {
    println!(
        "{} {} {} {}",
        Style::label("direction"),
        Style::code(from),
        Style::secondary("->"),
        Style::code(to)
    );
}

/// Prints the translation pane, the pinyin pane when present, and the status.
pub fn render_translation(view: &TranslationView) {
    println!("{}", view.translated_text());
    if !view.pinyin().is_empty() {
        println!("{}", Style::pinyin(view.pinyin()));
    }
    println!("{}", Style::secondary(view.status()));
    println!();
}

/// Prints the in-flight status right after a request is submitted.
pub fn render_pending(view: &TranslationView) {
    crate::status!("{}", Style::secondary(view.status()));
}

/// Prints the status line of a failed request. The translation pane is kept.
pub fn render_failure(view: &TranslationView) {
    eprintln!("{}", Style::error(view.status()));
    eprintln!();
}

pub fn render_swapped(view: &TranslationView) {
    print_direction(view.source_lang(), view.target_lang());
    if !view.source_text().is_empty() {
        println!("{} {}", Style::label("source"), view.source_text());
    }
    if !view.translated_text().is_empty() {
        println!("{} {}", Style::label("target"), view.translated_text());
    }
    if !view.pinyin().is_empty() {
        println!("{} {}", Style::label("pinyin"), Style::pinyin(view.pinyin()));
    }
    println!();
}

pub fn render_status(view: &TranslationView, pending: usize) {
    println!("{}", Style::header(view.status()));
    println!(
        "  {}  {}",
        Style::label("Characters:"),
        Style::value(view.char_count())
    );
    println!(
        "  {}       {}",
        Style::label("Words:"),
        Style::value(view.word_count())
    );
    println!(
        "  {} {}",
        Style::label("Translations:"),
        Style::value(view.translation_count())
    );
    println!("  {}", Style::secondary(view.last_translation_line()));
    if pending > 0 {
        println!("  {} {}", Style::label("In flight:"), Style::value(pending));
    }
    println!();
}

pub fn print_config(config: &ResolvedConfig, view: &TranslationView) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    if let Some(model) = &config.model {
        println!("  {}      {}", Style::label("model"), Style::value(model));
    }
    println!(
        "  {}       {}",
        Style::label("from"),
        Style::code(view.source_lang())
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        Style::code(view.target_lang())
    );
    println!(
        "  {}     {}",
        Style::label("pinyin"),
        Style::value(on_off(view.show_pinyin()))
    );
    println!(
        "  {}    {}",
        Style::label("workers"),
        Style::value(config.workers)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        config.timeout.map_or_else(
            || Style::secondary("(none)"),
            |t| Style::value(format!("{}s", t.as_secs()))
        )
    );
    println!(
        "  {}      {}",
        Style::label("stale"),
        Style::value(if view.discard_stale() {
            "discard"
        } else {
            "show"
        })
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("English-Chinese translation"));
    println!(
        "  {}",
        Style::secondary("Enter any text to translate it in the current direction.")
    );
    println!(
        "  {}",
        Style::secondary("Requests run in the background, so you can keep typing.")
    );
    println!(
        "  {}",
        Style::secondary("Chinese output is annotated with tone-marked pinyin.")
    );
    println!();

    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);
    for (usage, description) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{usage:<width$}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_notice(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
