//! Tone-marked pinyin for Chinese text.

use pinyin::ToPinyin;

/// Annotates `text` with tone-marked pinyin, one token per Han character.
///
/// Consecutive non-Han characters (Latin words, digits, punctuation) are kept
/// together as a single token. Tokens are separated by single spaces.
pub fn annotate(text: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut run = String::new();

    for ch in text.chars() {
        if let Some(syllable) = ch.to_pinyin() {
            flush_run(&mut run, &mut tokens);
            tokens.push(syllable.with_tone().to_string());
        } else {
            run.push(ch);
        }
    }
    flush_run(&mut run, &mut tokens);

    tokens.join(" ")
}

/// Returns true if `text` contains at least one Han character.
pub fn contains_han(text: &str) -> bool {
    text.chars().any(|ch| ch.to_pinyin().is_some())
}

fn flush_run(run: &mut String, tokens: &mut Vec<String>) {
    let trimmed = run.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_han_characters() {
        assert_eq!(annotate("你好"), "nǐ hǎo");
    }

    #[test]
    fn test_annotate_keeps_punctuation_runs() {
        assert_eq!(annotate("你好，世界"), "nǐ hǎo ， shì jiè");
    }

    #[test]
    fn test_annotate_mixed_text() {
        assert_eq!(annotate("我爱 Rust 语言"), "wǒ ài Rust yǔ yán");
    }

    #[test]
    fn test_annotate_non_chinese_passthrough() {
        assert_eq!(annotate("hi mom!"), "hi mom!");
        assert_eq!(annotate(""), "");
        assert_eq!(annotate("   "), "");
    }

    #[test]
    fn test_contains_han() {
        assert!(contains_han("嗨，妈妈！"));
        assert!(!contains_han("hi mom!"));
    }
}
