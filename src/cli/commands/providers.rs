//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, ProviderConfig, ProviderKind};
use crate::translation::DEFAULT_GOOGLE_ENDPOINT;
use crate::ui::Style;

/// Prints available providers to stdout.
///
/// The built-in `google` provider is always listed. With `specific_provider`,
/// shows details for that provider only.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();
    let default_provider = config
        .fanyi
        .provider
        .as_deref()
        .unwrap_or(DEFAULT_PROVIDER);

    let providers = provider_list(&config);

    if let Some(name) = specific_provider {
        let Some((_, provider)) = providers.iter().find(|(n, _)| n == name) else {
            bail!("Provider '{name}' not found");
        };
        print_details(name, provider, name == default_provider);
        return Ok(());
    }

    println!("{}\n", Style::header("Available providers"));
    for (name, provider) in &providers {
        let marker = if name == default_provider {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("  {}{marker}", Style::value(name));
        println!(
            "    {} {}",
            Style::label("endpoint:"),
            Style::secondary(endpoint_of(provider))
        );
        if let Some(model) = &provider.model {
            println!("    {} {}", Style::label("model:"), model);
        }
    }
    println!();
    println!(
        "{}",
        Style::hint(format!(
            "Add providers to {}",
            manager.config_path().display()
        ))
    );

    Ok(())
}

/// Configured providers sorted by name, plus the built-in one if absent.
fn provider_list(config: &ConfigFile) -> Vec<(String, ProviderConfig)> {
    let mut providers: Vec<(String, ProviderConfig)> = config
        .providers
        .iter()
        .map(|(name, provider)| (name.clone(), provider.clone()))
        .collect();
    providers.sort_by(|a, b| a.0.cmp(&b.0));

    if !config.providers.contains_key(DEFAULT_PROVIDER) {
        providers.insert(
            0,
            (
                DEFAULT_PROVIDER.to_string(),
                ProviderConfig {
                    kind: ProviderKind::Google,
                    ..ProviderConfig::default()
                },
            ),
        );
    }
    providers
}

fn endpoint_of(provider: &ProviderConfig) -> &str {
    match (&provider.endpoint, provider.kind) {
        (Some(endpoint), _) => endpoint,
        (None, ProviderKind::Google) => DEFAULT_GOOGLE_ENDPOINT,
        (None, ProviderKind::OpenAi) => "(not set)",
    }
}

fn kind_name(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Google => "google",
        ProviderKind::OpenAi => "openai",
    }
}

fn print_details(name: &str, provider: &ProviderConfig, is_default: bool) {
    println!(
        "{} {}{}",
        Style::header("Provider:"),
        Style::value(name),
        if is_default {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    );
    println!("  {}     {}", Style::label("kind"), kind_name(provider.kind));
    println!(
        "  {} {}",
        Style::label("endpoint"),
        Style::secondary(endpoint_of(provider))
    );
    if let Some(model) = &provider.model {
        println!("  {}    {model}", Style::label("model"));
    }
    if provider.requires_api_key() {
        let status = if provider.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        };
        println!("  {}  {status}", Style::label("api_key"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_list_includes_builtin_google() {
        let providers = provider_list(&ConfigFile::default());
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].0, "google");
        assert_eq!(endpoint_of(&providers[0].1), DEFAULT_GOOGLE_ENDPOINT);
    }

    #[test]
    fn test_provider_list_sorted_after_builtin() {
        let mut config = ConfigFile::default();
        for name in ["zeta", "alpha"] {
            config.providers.insert(
                name.to_string(),
                ProviderConfig {
                    kind: ProviderKind::OpenAi,
                    endpoint: Some(format!("http://{name}.local")),
                    model: Some("m".into()),
                    ..ProviderConfig::default()
                },
            );
        }

        let names: Vec<_> = provider_list(&config).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["google", "alpha", "zeta"]);
    }

    #[test]
    fn test_openai_without_endpoint_shows_not_set() {
        let provider = ProviderConfig {
            kind: ProviderKind::OpenAi,
            ..ProviderConfig::default()
        };
        assert_eq!(endpoint_of(&provider), "(not set)");
        assert_eq!(kind_name(provider.kind), "openai");
    }
}
