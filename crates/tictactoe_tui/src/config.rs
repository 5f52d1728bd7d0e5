//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// User-tunable settings for the terminal game.
///
/// Every key is optional; missing keys fall back to [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Title shown above the menu and the board.
    title: String,

    /// File that receives the tracing output.
    log_file: PathBuf,

    /// Side the human plays against the computer.
    human_mark: Player,

    /// Delay before the computer answers, in milliseconds.
    com_delay_ms: u64,

    /// Half-period of the cursor blink, in milliseconds.
    blink_ms: u64,

    /// Two clicks on the same cell within this window count as a double click.
    double_click_ms: u64,

    /// Input poll timeout, in milliseconds.
    tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe".to_string(),
            log_file: PathBuf::from("tictactoe.log"),
            human_mark: Player::X,
            com_delay_ms: 400,
            blink_ms: 500,
            double_click_ms: 400,
            tick_ms: 50,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or the defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the log file destination.
    pub fn set_log_file(&mut self, path: PathBuf) {
        self.log_file = path;
    }

    /// Delay before the computer answers.
    pub fn com_delay(&self) -> Duration {
        Duration::from_millis(self.com_delay_ms)
    }

    /// Half-period of the cursor blink.
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_ms)
    }

    /// Double-click window.
    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }

    /// Input poll timeout.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
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
