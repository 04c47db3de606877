//! Client for the public Google Translate web endpoint.

use reqwest::{Client, Url};
use serde_json::Value;

use super::provider::{ProviderMetadata, Translator};
use super::{Language, TranslationError};

pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com";

pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    fn request_url(&self, text: &str, from: Language, to: Language) -> Result<Url, TranslationError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));

        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", google_code(from)),
                ("tl", google_code(to)),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| TranslationError::ProviderUnavailable(format!("invalid endpoint {base}: {e}")))
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        let url = self.request_url(text, from, to)?;
        tracing::debug!(endpoint = %self.endpoint, %from, %to, "sending google translate request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::ProviderError(format!(
                "request failed with status {status}: {}",
                body.trim()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::ProviderError(format!("malformed response: {e}")))?;

        extract_translation(&body)
            .ok_or_else(|| TranslationError::ProviderError("response contained no translation".into()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "google".to_string(),
            endpoint: self.endpoint.clone(),
            requires_api_key: false,
        }
    }
}

/// The endpoint wants a region-qualified code for Simplified Chinese.
const fn google_code(lang: Language) -> &'static str {
    match lang {
        Language::En => "en",
        Language::Zh => "zh-CN",
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The body looks like `[[["你好","hello",null,null,10], ...], null, "en", ...]`.
fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0)?.as_str())
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
