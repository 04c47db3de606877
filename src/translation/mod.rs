mod adapter;
mod google;
mod language;
mod openai;
mod prompt;
mod provider;
mod request;
mod sse_parser;

pub use adapter::TranslationAdapter;
pub use google::{DEFAULT_GOOGLE_ENDPOINT, GoogleTranslator};
pub use language::{Language, SUPPORTED_LANGUAGES, print_languages, validate_language};
pub use openai::OpenAiTranslator;
pub use provider::{ProviderMetadata, Translator};
pub use request::{TranslationError, TranslationRequest, TranslationResult};
