pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. \
     Translate the following text from {source_language} to {target_language}. \
     Output only the translated text without any explanations. \
     Preserve the original formatting including blank lines and whitespace.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    // Placeholders are for string replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}
