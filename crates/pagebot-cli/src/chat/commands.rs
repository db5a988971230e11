//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and stand in for the widget chrome: the launcher
//! button, the minimize toggle and the close button.

use console::style;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    /// Open the panel (launcher button).
    Open,
    /// Collapse or expand the panel.
    Minimize,
    /// Hide the panel. History is kept.
    Close,
    History,
    Clear,
    Exit,
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/open" | "/o" => Some(ChatCommand::Open),
        "/minimize" | "/min" | "/m" => Some(ChatCommand::Minimize),
        "/close" | "/x" => Some(ChatCommand::Close),
        "/history" => Some(ChatCommand::History),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}     Open the assistant panel", style("/open").cyan());
    println!("  {} Collapse or expand the panel", style("/minimize").cyan());
    println!("  {}    Hide the panel (history is kept)", style("/close").cyan());
    println!("  {}  Show the conversation so far", style("/history").cyan());
    println!("  {}    Clear the screen", style("/clear").cyan());
    println!("  {}     Leave", style("/exit").cyan());
    println!();
    println!(
        "  {}",
        style("Ask about projects, skills, AI, experience or how to get in touch.").dim()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chrome_commands() {
        assert_eq!(parse("/open"), Some(ChatCommand::Open));
        assert_eq!(parse("/min"), Some(ChatCommand::Minimize));
        assert_eq!(parse("/minimize"), Some(ChatCommand::Minimize));
        assert_eq!(parse("/close"), Some(ChatCommand::Close));
        assert_eq!(parse("  /X  "), Some(ChatCommand::Close));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_ignores_arguments() {
        assert_eq!(parse("/history all"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("tell me about your projects"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
