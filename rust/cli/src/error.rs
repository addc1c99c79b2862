//! Error types for the CLI application.

use betcha_engine::errors::GameError;
use std::fmt;

use crate::config::ConfigError;

/// Errors a command handler can return; each maps to exit code 2.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e = CliError::from(GameError::InsufficientMoney {
            amount: 10,
            balance: 5,
        });
        assert_eq!(
            e.to_string(),
            "Engine error: Insufficient money: bet 10, balance 5"
        );
    }

    #[test]
    fn config_errors_are_prefixed() {
        let e = CliError::from(ConfigError::Invalid("Invalid seed: x".into()));
        assert_eq!(e.to_string(), "Configuration error: Invalid seed: x");
    }
}
