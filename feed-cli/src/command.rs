//! Console command parser
//!
//! Parses the lines typed at the feed prompt, like "more", "login <token>".

use cvi_feed::Credential;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}

/// Commands accepted at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Scroll to the bottom of the list, bringing the sentinel into view
    More,
    /// Retry the failed page
    Retry,
    /// Sign in with an access token
    Login(Credential),
    /// Sign out
    Logout,
    Help,
    Quit,
}

/// Parse one prompt line. An empty line scrolls, like pressing "more".
pub fn parse_command(input: &str) -> Result<ConsoleCommand, ParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(command) = parts.first() else {
        return Ok(ConsoleCommand::More);
    };

    match command.to_lowercase().as_str() {
        "more" | "m" | "next" => Ok(ConsoleCommand::More),
        "retry" | "r" => Ok(ConsoleCommand::Retry),
        "login" => match parts.get(1) {
            Some(token) => Ok(ConsoleCommand::Login(Credential::new(*token))),
            None => Err(ParseError::MissingArgument("login".to_string())),
        },
        "logout" => Ok(ConsoleCommand::Logout),
        "help" | "h" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Prompt help text
pub fn help_text() -> &'static str {
    "\
Commands:
  <enter> | more    scroll to the end of the list
  retry             retry a failed page
  login <token>     sign in with an access token
  logout            sign out
  help              show this help
  quit              leave"
}
