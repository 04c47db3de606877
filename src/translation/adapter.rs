use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;

use super::google::GoogleTranslator;
use super::openai::OpenAiTranslator;
use super::provider::{ProviderMetadata, Translator};
use super::{Language, TranslationError, TranslationRequest, TranslationResult};
use crate::config::{ProviderKind, ResolvedConfig};

/// Uniform request/response contract over a [`Translator`] provider.
///
/// Empty input is rejected before the provider is touched. There are no
/// retries and no caching; every call is one upstream request.
pub struct TranslationAdapter {
    translator: Arc<dyn Translator>,
    timeout: Option<Duration>,
}

impl TranslationAdapter {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            timeout: None,
        }
    }

    /// Bounds each provider call. `None` waits indefinitely.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the adapter for the provider selected in `config`.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let translator: Arc<dyn Translator> = match config.provider_kind {
            ProviderKind::Google => Arc::new(GoogleTranslator::new(client, config.endpoint.clone())),
            ProviderKind::OpenAi => {
                let model = config.model.clone().ok_or_else(|| {
                    anyhow::anyhow!(
                        "Provider '{}' requires a model\n\n\
                         Please provide it via:\n  \
                         - CLI option: fanyi --model <name>\n  \
                         - Config file: set model under [providers.{}]",
                        config.provider_name,
                        config.provider_name
                    )
                })?;
                Arc::new(OpenAiTranslator::new(
                    client,
                    config.endpoint.clone(),
                    model,
                    config.api_key.clone(),
                ))
            }
        };

        Ok(Self::new(translator).with_timeout(config.timeout))
    }

    pub fn metadata(&self) -> ProviderMetadata {
        self.translator.metadata()
    }

    /// Translates `request`, measuring the time spent upstream.
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        if request.is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let started = Instant::now();
        let call = self.translator.translate(
            request.trimmed_text(),
            request.source_lang,
            request.target_lang,
        );

        let translated = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                TranslationError::ProviderUnavailable(format!("timed out after {limit:?}"))
            })??,
            None => call.await?,
        };
        let elapsed_seconds = started.elapsed().as_secs_f64();

        if translated.trim().is_empty() {
            return Err(TranslationError::ProviderError(
                "provider returned an empty translation".into(),
            ));
        }

        tracing::debug!(
            from = %request.source_lang,
            to = %request.target_lang,
            elapsed_seconds,
            "translation completed"
        );

        Ok(TranslationResult {
            translated_text: translated,
            elapsed_seconds,
        })
    }

    /// Convenience form of [`Self::translate`] taking the fields directly.
    pub async fn translate_text(
        &self,
        text: &str,
        source_lang: Language,
        target_lang: Language,
    ) -> Result<TranslationResult, TranslationError> {
        self.translate(&TranslationRequest::new(text, source_lang, target_lang))
            .await
    }
}
