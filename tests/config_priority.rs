#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::collections::HashMap;
use std::time::Duration;

use fanyi::config::{
    ConfigFile, FanyiConfig, ProviderConfig, ProviderKind, ResolveOptions, resolve_config,
};
use fanyi::translation::{DEFAULT_GOOGLE_ENDPOINT, Language};

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "local".to_string(),
        ProviderConfig {
            kind: ProviderKind::OpenAi,
            endpoint: Some("http://localhost:11434".to_string()),
            model: Some("config_model".to_string()),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
        },
    );

    ConfigFile {
        fanyi: FanyiConfig {
            provider: Some("local".to_string()),
            from: Some(Language::Zh),
            to: Some(Language::En),
            show_pinyin: Some(true),
            discard_stale: Some(true),
            workers: Some(2),
            timeout_secs: Some(30),
        },
        providers,
    }
}

#[test]
fn test_config_file_used_when_cli_silent() {
    let config = make_config_with_defaults();
    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.provider_name, "local");
    assert_eq!(resolved.provider_kind, ProviderKind::OpenAi);
    assert_eq!(resolved.model.as_deref(), Some("config_model"));
    assert_eq!(resolved.api_key.as_deref(), Some("test_key"));
    assert_eq!(resolved.source_lang, Language::Zh);
    assert_eq!(resolved.target_lang, Language::En);
    assert!(resolved.discard_stale);
    assert_eq!(resolved.workers, 2);
    assert_eq!(resolved.timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_cli_languages_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: Some(Language::En),
        to: Some(Language::Zh),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.source_lang, Language::En);
    assert_eq!(resolved.target_lang, Language::Zh);
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model.as_deref(), Some("cli_model"));
}

#[test]
fn test_cli_provider_overrides_config_provider() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some("google".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "google");
    assert_eq!(resolved.provider_kind, ProviderKind::Google);
    assert_eq!(resolved.endpoint, DEFAULT_GOOGLE_ENDPOINT);
    assert!(resolved.api_key.is_none());
}

#[test]
fn test_cli_no_pinyin_overrides_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        no_pinyin: true,
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert!(!resolved.show_pinyin);
}

#[test]
fn test_cli_timeout_overrides_and_zero_disables() {
    let config = make_config_with_defaults();

    let options = ResolveOptions {
        timeout_secs: Some(5),
        ..ResolveOptions::default()
    };
    let resolved = resolve_config(&options, &config).unwrap();
    assert_eq!(resolved.timeout, Some(Duration::from_secs(5)));

    let options = ResolveOptions {
        timeout_secs: Some(0),
        ..ResolveOptions::default()
    };
    let resolved = resolve_config(&options, &config).unwrap();
    assert_eq!(resolved.timeout, None);
}

#[test]
fn test_builtin_defaults_with_empty_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.provider_name, "google");
    assert_eq!(resolved.source_lang, Language::En);
    assert_eq!(resolved.target_lang, Language::Zh);
    assert!(resolved.show_pinyin);
    assert!(!resolved.discard_stale);
    assert_eq!(resolved.workers, fanyi::config::DEFAULT_WORKERS);
    assert_eq!(resolved.timeout, None);
}

#[test]
fn test_empty_config_file_parses() {
    let config: ConfigFile = toml::from_str("").unwrap();
    assert!(config.providers.is_empty());
    assert!(config.fanyi.provider.is_none());
}
