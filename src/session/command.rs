/// Slash commands understood by the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Swap,
    Pinyin,
    Clear,
    /// `/from <lang>`; `None` when the argument is missing.
    From(Option<String>),
    /// `/to <lang>`; `None` when the argument is missing.
    To(Option<String>),
    Status,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// One line of session input.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Available slash commands: (usage, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/swap", "Swap languages and texts"),
    ("/pinyin", "Toggle pinyin for Chinese output"),
    ("/clear", "Clear all text"),
    ("/from <lang>", "Set the source language"),
    ("/to <lang>", "Set the target language"),
    ("/status", "Show counts and the last translation time"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit the session"),
];

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let mut parts = cmd.split_whitespace();
    let name = parts.next();
    let arg = parts.next().map(str::to_string);

    let command = match name {
        Some("swap") => SlashCommand::Swap,
        Some("pinyin") => SlashCommand::Pinyin,
        Some("clear") => SlashCommand::Clear,
        Some("from") => SlashCommand::From(arg),
        Some("to") => SlashCommand::To(arg),
        Some("status") => SlashCommand::Status,
        Some("config") => SlashCommand::Config,
        Some("help" | "?") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_input(""), Input::Empty);
        assert_eq!(parse_input("  \t "), Input::Empty);
    }

    #[test]
    fn test_parse_text_is_trimmed() {
        assert_eq!(parse_input("  hi mom!  "), Input::Text("hi mom!".into()));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("/swap"), Input::Command(SlashCommand::Swap));
        assert_eq!(parse_input("/pinyin"), Input::Command(SlashCommand::Pinyin));
        assert_eq!(parse_input("/clear"), Input::Command(SlashCommand::Clear));
        assert_eq!(parse_input("/status"), Input::Command(SlashCommand::Status));
        assert_eq!(parse_input("/config"), Input::Command(SlashCommand::Config));
        assert_eq!(parse_input("/help"), Input::Command(SlashCommand::Help));
    }

    #[test]
    fn test_parse_quit_aliases() {
        for line in ["/quit", "/exit", "/q"] {
            assert_eq!(parse_input(line), Input::Command(SlashCommand::Quit));
        }
    }

    #[test]
    fn test_parse_language_commands() {
        assert_eq!(
            parse_input("/to en"),
            Input::Command(SlashCommand::To(Some("en".into())))
        );
        assert_eq!(
            parse_input("/from   zh"),
            Input::Command(SlashCommand::From(Some("zh".into())))
        );
        assert_eq!(parse_input("/to"), Input::Command(SlashCommand::To(None)));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_input("/translate  now"),
            Input::Command(SlashCommand::Unknown("translate now".into()))
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for (usage, _) in SLASH_COMMANDS {
            let name = usage.split_whitespace().next().unwrap_or(usage);
            assert!(
                !matches!(
                    parse_input(name),
                    Input::Command(SlashCommand::Unknown(_))
                ),
                "{name} should be recognized"
            );
        }
    }
}
