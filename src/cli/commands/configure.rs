//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Confirm, Select};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, DEFAULT_WORKERS};
use crate::translation::{Language, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// What `fanyi configure` should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureMode {
    /// Prompt for each default and save.
    Interactive,
    /// Print the current defaults.
    Show,
    /// Create an empty config file if none exists.
    Init,
}

pub fn run_configure(mode: ConfigureMode) -> Result<()> {
    let manager = ConfigManager::new()?;

    match mode {
        ConfigureMode::Init => {
            let created = manager.ensure_exists()?;
            let verb = if created { "Created" } else { "Found existing" };
            println!(
                "{} {verb} config file at {}",
                Style::success("✓"),
                Style::secondary(manager.config_path().display())
            );
            Ok(())
        }
        ConfigureMode::Show => {
            let config = manager.load_or_default();
            print_current_defaults(&config);
            println!(
                "{}",
                Style::hint(format!("Config file: {}", manager.config_path().display()))
            );
            Ok(())
        }
        ConfigureMode::Interactive => handle_prompt_cancellation(|| configure_interactive(&manager)),
    }
}

fn configure_interactive(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default();
    print_current_defaults(&config);

    let provider = select_provider(&config)?;
    let from = select_language("Default source language:", config.fanyi.from.unwrap_or(Language::En))?;
    let to = select_language(
        "Default target language:",
        config.fanyi.to.unwrap_or_else(|| from.other()),
    )?;
    let show_pinyin = Confirm::new("Show pinyin for Chinese output?")
        .with_default(config.fanyi.show_pinyin.unwrap_or(true))
        .prompt()?;
    let discard_stale = Confirm::new("Hide results that arrive after a newer one?")
        .with_default(config.fanyi.discard_stale.unwrap_or(false))
        .with_help_message("Requests are never cancelled; this only affects what is shown")
        .prompt()?;

    config.fanyi.provider = Some(provider);
    config.fanyi.from = Some(from);
    config.fanyi.to = Some(to);
    config.fanyi.show_pinyin = Some(show_pinyin);
    config.fanyi.discard_stale = Some(discard_stale);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let defaults = &config.fanyi;
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}       {}",
        Style::label("provider"),
        defaults.provider.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}           {}",
        Style::label("from"),
        defaults.from.map_or_else(not_set, Style::code)
    );
    println!(
        "  {}             {}",
        Style::label("to"),
        defaults.to.map_or_else(not_set, Style::code)
    );
    println!(
        "  {}    {}",
        Style::label("show_pinyin"),
        defaults.show_pinyin.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("discard_stale"),
        defaults.discard_stale.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("workers"),
        defaults
            .workers
            .map_or_else(|| Style::secondary(format!("({DEFAULT_WORKERS})")), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("timeout_secs"),
        defaults.timeout_secs.map_or_else(not_set, Style::value)
    );
    println!();
}

fn provider_names(config: &ConfigFile) -> Vec<String> {
    let mut names: Vec<String> = config.providers.keys().cloned().collect();
    names.sort_unstable();
    if !names.iter().any(|n| n == DEFAULT_PROVIDER) {
        names.insert(0, DEFAULT_PROVIDER.to_string());
    }
    names
}

fn select_provider(config: &ConfigFile) -> Result<String> {
    let names = provider_names(config);
    let current = config.fanyi.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);
    let cursor = names.iter().position(|n| n == current).unwrap_or(0);

    Ok(Select::new("Default provider:", names)
        .with_starting_cursor(cursor)
        .prompt()?)
}

fn language_option(lang: Language) -> String {
    format!("{} - {}", lang.code(), lang.name())
}

fn select_language(message: &str, current: Language) -> Result<Language> {
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(lang, _)| language_option(*lang))
        .collect();
    let cursor = SUPPORTED_LANGUAGES
        .iter()
        .position(|(lang, _)| *lang == current)
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(cursor)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    code.parse()
}
