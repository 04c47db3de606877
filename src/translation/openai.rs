//! Client for OpenAI-compatible chat completion endpoints.

use std::borrow::Cow;

use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;

use super::prompt::build_system_prompt;
use super::provider::{ProviderMetadata, Translator};
use super::sse_parser::sse_to_text_stream;
use super::{Language, TranslationError};

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

pub struct OpenAiTranslator {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiTranslator {
    pub fn new(client: Client, endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            model,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Result<String, TranslationError> {
        let url = self.completions_url();
        let system_prompt = build_system_prompt(from.name(), to.name());

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        tracing::debug!(%url, model = %self.model, "sending chat completion request");
        let response = http_request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::ProviderError(format!(
                "request failed with status {status}: {}",
                body.trim()
            )));
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut translated = String::new();

        while let Some(chunk) = stream.next().await {
            translated.push_str(&chunk?);
        }

        Ok(translated)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: format!("openai ({})", self.model),
            endpoint: self.endpoint.clone(),
            requires_api_key: self.api_key.is_some(),
        }
    }
}
