use super::{Language, TranslationError};

/// Translation provider interface.
///
/// Implementations perform exactly one upstream call per invocation and
/// never retry.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `from` to `to`.
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
    pub requires_api_key: bool,
}
