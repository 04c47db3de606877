use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ResolveOptions;
use crate::translation::Language;

#[derive(Parser, Debug)]
#[command(name = "fanyi")]
#[command(about = "English/Chinese translation with pinyin annotation")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Text to translate (reads FILE or stdin if not provided)
    pub text: Option<String>,

    /// File to translate
    #[arg(short = 'f', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub translation: TranslationArgs,

    /// Upper bound on the provider call, in seconds (0 disables)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress status output on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by one-shot and session mode.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TranslationArgs {
    /// Source language code (en, zh)
    #[arg(long = "from", value_name = "LANG")]
    pub from: Option<Language>,

    /// Target language code (en, zh)
    #[arg(short = 't', long = "to", value_name = "LANG")]
    pub to: Option<Language>,

    /// Provider name from config (built-in: google)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name (OpenAI-compatible providers)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Do not annotate Chinese output with pinyin
    #[arg(long)]
    pub no_pinyin: bool,
}

impl TranslationArgs {
    pub fn resolve_options(&self, timeout_secs: Option<u64>) -> ResolveOptions {
        ResolveOptions {
            from: self.from,
            to: self.to,
            provider: self.provider.clone(),
            model: self.model.clone(),
            no_pinyin: self.no_pinyin,
            timeout_secs,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive translation session
    Session {
        #[command(flatten)]
        translation: TranslationArgs,

        /// Upper bound on each provider call, in seconds (0 disables)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },
    /// List supported language codes
    Languages,
    /// Show available providers
    Providers {
        /// Show details for one provider
        provider: Option<String>,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long, conflicts_with = "init")]
        show: bool,

        /// Only create an empty config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_flags() {
        let args = Args::try_parse_from([
            "fanyi", "hi mom!", "--from", "en", "--to", "zh", "-p", "google", "--no-pinyin",
            "--timeout", "5", "-vv",
        ])
        .unwrap();

        assert_eq!(args.text.as_deref(), Some("hi mom!"));
        assert_eq!(args.translation.from, Some(Language::En));
        assert_eq!(args.translation.to, Some(Language::Zh));
        assert_eq!(args.translation.provider.as_deref(), Some("google"));
        assert!(args.translation.no_pinyin);
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.verbose, 2);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let err = Args::try_parse_from(["fanyi", "--to", "fr", "hello"]).unwrap_err();
        assert!(err.to_string().contains("Invalid language code"));
    }

    #[test]
    fn test_text_and_file_conflict() {
        assert!(Args::try_parse_from(["fanyi", "hello", "-f", "notes.txt"]).is_err());
    }

    #[test]
    fn test_parse_session_subcommand() {
        let args = Args::try_parse_from(["fanyi", "session", "--to", "en", "-m", "gemma3"]).unwrap();
        match args.command {
            Some(Command::Session { translation, .. }) => {
                assert_eq!(translation.to, Some(Language::En));
                assert_eq!(translation.model.as_deref(), Some("gemma3"));
            }
            other => panic!("expected session, got {other:?}"),
        }
    }

    #[test]
    fn test_configure_show_conflicts_with_init() {
        assert!(Args::try_parse_from(["fanyi", "configure", "--show", "--init"]).is_err());
    }

    #[test]
    fn test_resolve_options_carries_overrides() {
        let args = TranslationArgs {
            to: Some(Language::En),
            no_pinyin: true,
            ..TranslationArgs::default()
        };
        let options = args.resolve_options(Some(3));
        assert_eq!(options.to, Some(Language::En));
        assert!(options.no_pinyin);
        assert_eq!(options.timeout_secs, Some(3));
    }
}
