use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::translation::{DEFAULT_GOOGLE_ENDPOINT, Language};

/// Provider used when neither the CLI nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "google";

/// Default size of the background worker pool.
pub const DEFAULT_WORKERS: usize = 4;

/// Default settings in the `[fanyi]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FanyiConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default source language.
    pub from: Option<Language>,
    /// Default target language.
    pub to: Option<Language>,
    /// Show pinyin under Chinese output.
    pub show_pinyin: Option<bool>,
    /// Ignore outcomes older than the last displayed one.
    pub discard_stale: Option<bool>,
    /// Maximum number of translations running at once.
    pub workers: Option<usize>,
    /// Upper bound on a single provider call, in seconds.
    pub timeout_secs: Option<u64>,
}

/// Which wire protocol a provider speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// The public Google Translate web endpoint.
    #[default]
    Google,
    /// An OpenAI-compatible chat completions endpoint.
    OpenAi,
}

/// Configuration for a translation provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,
    /// Base URL of the service.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Model name (OpenAI-compatible providers only).
    #[serde(default)]
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }

    fn builtin_google() -> Self {
        Self {
            kind: ProviderKind::Google,
            endpoint: Some(DEFAULT_GOOGLE_ENDPOINT.to_string()),
            ..Self::default()
        }
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/fanyi/config.toml`. An empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub fanyi: FanyiConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub provider_name: String,
    pub provider_kind: ProviderKind,
    pub endpoint: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub source_lang: Language,
    pub target_lang: Language,
    pub show_pinyin: bool,
    pub discard_stale: bool,
    pub workers: usize,
    pub timeout: Option<Duration>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<Language>,
    pub to: Option<Language>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub no_pinyin: bool,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if the provider is unknown, or if it lacks an endpoint,
/// a model, or a required API key.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.fanyi.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider_config = match config_file.providers.get(&provider_name) {
        Some(provider) => provider.clone(),
        None if provider_name == DEFAULT_PROVIDER => ProviderConfig::builtin_google(),
        None => {
            let mut available: Vec<&str> =
                config_file.providers.keys().map(String::as_str).collect();
            available.sort_unstable();
            if !available.contains(&DEFAULT_PROVIDER) {
                available.insert(0, DEFAULT_PROVIDER);
            }
            bail!(
                "Provider '{provider_name}' not found\n\n\
                 Available providers:\n  \
                 - {}\n\n\
                 Add providers to ~/.config/fanyi/config.toml",
                available.join("\n  - ")
            );
        }
    };

    let endpoint = match (&provider_config.endpoint, provider_config.kind) {
        (Some(endpoint), _) => endpoint.clone(),
        (None, ProviderKind::Google) => DEFAULT_GOOGLE_ENDPOINT.to_string(),
        (None, ProviderKind::OpenAi) => bail!(
            "Provider '{provider_name}' has no endpoint\n\n\
             Set endpoint under [providers.{provider_name}] in ~/.config/fanyi/config.toml"
        ),
    };

    let model = options
        .model
        .as_ref()
        .or(provider_config.model.as_ref())
        .cloned();

    if provider_config.kind == ProviderKind::OpenAi && model.is_none() {
        bail!(
            "Missing required configuration: 'model'\n\n\
             Please provide it via:\n  \
             - CLI option: fanyi --model <name>\n  \
             - Config file: set model under [providers.{provider_name}]"
        );
    }

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/fanyi/config.toml"
        );
    }

    let defaults = &config_file.fanyi;

    Ok(ResolvedConfig {
        provider_name,
        provider_kind: provider_config.kind,
        endpoint,
        model,
        api_key,
        source_lang: options.from.or(defaults.from).unwrap_or(Language::En),
        target_lang: options.to.or(defaults.to).unwrap_or(Language::Zh),
        show_pinyin: !options.no_pinyin && defaults.show_pinyin.unwrap_or(true),
        discard_stale: defaults.discard_stale.unwrap_or(false),
        workers: defaults.workers.unwrap_or(DEFAULT_WORKERS).max(1),
        timeout: options
            .timeout_secs
            .or(defaults.timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/fanyi/config.toml`
    /// or `~/.config/fanyi/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        self.create_parent_dir()?;

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Falls back to defaults when the file is missing or unreadable.
    pub fn load_or_default(&self) -> ConfigFile {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                if self.config_path.exists() {
                    tracing::warn!("ignoring unreadable config: {e:#}");
                }
                ConfigFile::default()
            }
        }
    }

    /// Creates an empty config file if none exists.
    ///
    /// Returns `true` when the file was created.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }

        self.create_parent_dir()?;
        crate::fs::atomic_write(&self.config_path, "").with_context(|| {
            format!(
                "Failed to create config file: {}",
                self.config_path.display()
            )
        })?;
        tracing::info!(path = %self.config_path.display(), "created empty config file");

        Ok(true)
    }

    /// Loads the config file, creating an empty one on first run, and
    /// merges `options` over it.
    pub fn resolve(&self, options: &ResolveOptions) -> Result<ResolvedConfig> {
        if let Err(e) = self.ensure_exists() {
            tracing::warn!("could not create config file: {e:#}");
        }
        resolve_config(options, &self.load_or_default())
    }

    fn create_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        Ok(())
    }
}
