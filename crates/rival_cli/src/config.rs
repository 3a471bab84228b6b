//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rival_tictactoe::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMove {
    /// The human opens.
    Human,
    /// The opponent opens.
    Opponent,
}

impl From<FirstMove> for Side {
    fn from(first: FirstMove) -> Self {
        match first {
            FirstMove::Human => Side::Human,
            FirstMove::Opponent => Side::Opponent,
        }
    }
}

/// Settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol drawn for human cells.
    #[serde(default = "default_human_mark")]
    human_mark: char,

    /// Symbol drawn for opponent cells.
    #[serde(default = "default_opponent_mark")]
    opponent_mark: char,

    /// Side that moves first.
    #[serde(default = "default_first")]
    first: FirstMove,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_mark() -> char {
    'O'
}

fn default_opponent_mark() -> char {
    'X'
}

fn default_first() -> FirstMove {
    FirstMove::Human
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: default_human_mark(),
            opponent_mark: default_opponent_mark(),
            first: default_first(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first = ?config.first, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with a different opening side.
    pub fn with_first(mut self, first: FirstMove) -> Self {
        self.first = first;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.human_mark == self.opponent_mark {
            return Err(ConfigError::new(format!(
                "human_mark and opponent_mark must differ (both are {:?})",
                self.human_mark
            )));
        }
        for mark in [self.human_mark, self.opponent_mark] {
            if mark.is_ascii_digit() || mark.is_whitespace() || mark == '.' {
                return Err(ConfigError::new(format!(
                    "Mark {:?} would be confused with an empty cell",
                    mark
                )));
            }
            // `evaluate` splits its board argument on commas.
            if mark == ',' {
                return Err(ConfigError::new(
                    "Mark ',' is reserved as the cell separator".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A `rival.toml` that was rejected.
///
/// Records the call site that rejected the file.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid game config: {} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What was wrong with the file.
    pub message: String,
    /// Line of the check that failed.
    pub line: u32,
    /// Source file of the check that failed.
    pub file: &'static str,
}

impl ConfigError {
    /// Builds an error located at the caller.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        debug!(file = loc.file(), line = loc.line(), "Config rejected");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
