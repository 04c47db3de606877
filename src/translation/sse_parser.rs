//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::TranslationError;

/// Response structure for streaming chat completions.
#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Handles buffering, line parsing, and the `[DONE]` terminator. A transport
/// error ends the stream after yielding it.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, TranslationError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(TranslationError::ProviderUnavailable(format!("stream interrupted: {e}")));
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();

                if let Some(content) = parse_sse_line(line.trim()) {
                    yield Ok(content);
                } else if line.trim() == "data: [DONE]" {
                    return;
                }
            }
        }
    }
}

/// Parses a single SSE line and extracts the text content.
///
/// Returns `None` for non-data lines, empty content, or parse errors.
///
/// ```ignore
/// let line = r#"data: {"choices":[{"delta":{"content":"你好"}}]}"#;
/// assert_eq!(parse_sse_line(line), Some("你好".to_string()));
/// ```
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data: ")?;

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}
