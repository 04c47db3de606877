//! Configuration file management and provider settings.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_PROVIDER, DEFAULT_WORKERS, FanyiConfig, ProviderConfig,
    ProviderKind, ResolveOptions, ResolvedConfig, resolve_config,
};
