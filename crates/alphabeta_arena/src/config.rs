//! Tournament configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a tournament between two contestants.
///
/// Loaded from TOML:
///
/// ```toml
/// player1 = "AI-9"
/// player2 = "Alice"
/// matches = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// First contestant; `AI-<depth>` for a minimax AI.
    player1: String,

    /// Second contestant; `AI-<depth>` for a minimax AI.
    player2: String,

    /// Number of rounds to play.
    #[serde(default = "default_matches")]
    matches: u32,
}

#[instrument]
fn default_matches() -> u32 {
    1
}

impl TournamentConfig {
    /// Creates a new tournament configuration.
    #[instrument]
    pub fn new(player1: String, player2: String, matches: u32) -> Self {
        Self {
            player1,
            player2,
            matches,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player1 = %config.player1, player2 = %config.player2, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces fields with any values given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player1: Option<String>,
        player2: Option<String>,
        matches: Option<u32>,
    ) -> Self {
        if let Some(player1) = player1 {
            self.player1 = player1;
        }
        if let Some(player2) = player2 {
            self.player2 = player2;
        }
        if let Some(matches) = matches {
            self.matches = matches;
        }
        self
    }

    /// Checks that both contestants are named and at least one round is played.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player1.trim().is_empty() || self.player2.trim().is_empty() {
            return Err(ConfigError::new("Both players need a name".to_string()));
        }
        if self.matches == 0 {
            return Err(ConfigError::new("At least one match must be played".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_matches() {
        let config: TournamentConfig =
            toml::from_str("player1 = \"AI-3\"\nplayer2 = \"Bob\"\n").unwrap();
        assert_eq!(config.player1(), "AI-3");
        assert_eq!(config.player2(), "Bob");
        assert_eq!(*config.matches(), 1);
    }

    #[test]
    fn test_overrides_replace_given_fields() {
        let config = TournamentConfig::new("A".to_string(), "B".to_string(), 1)
            .with_overrides(None, Some("C".to_string()), Some(4));
        assert_eq!(config, TournamentConfig::new("A".to_string(), "C".to_string(), 4));
    }

    #[test]
    fn test_validate_rejects_zero_matches() {
        let config = TournamentConfig::new("A".to_string(), "B".to_string(), 0);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("At least one match"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let config = TournamentConfig::new("  ".to_string(), "B".to_string(), 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
