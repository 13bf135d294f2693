//! Game settings, loadable from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tunable game behavior.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// How long an error message stays up before it is cleared, in milliseconds.
    #[serde(default = "default_error_clear_delay_ms")]
    error_clear_delay_ms: u64,

    /// Ignore moves once a winner has been declared.
    #[serde(default)]
    lock_after_win: bool,
}

#[instrument]
fn default_error_clear_delay_ms() -> u64 {
    2000
}

impl GameSettings {
    /// Creates settings with explicit values.
    #[instrument]
    pub fn new(error_clear_delay_ms: u64, lock_after_win: bool) -> Self {
        Self {
            error_clear_delay_ms,
            lock_after_win,
        }
    }

    /// Error clear delay as a [`Duration`].
    pub fn error_clear_delay(&self) -> Duration {
        Duration::from_millis(self.error_clear_delay_ms)
    }

    /// Returns these settings with a different error clear delay.
    pub fn with_error_clear_delay_ms(mut self, ms: u64) -> Self {
        self.error_clear_delay_ms = ms;
        self
    }

    /// Returns these settings with `lock_after_win` set.
    pub fn with_lock_after_win(mut self, lock: bool) -> Self {
        self.lock_after_win = lock;
        self
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            error_clear_delay_ms = settings.error_clear_delay_ms,
            lock_after_win = settings.lock_after_win,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            error_clear_delay_ms: default_error_clear_delay_ms(),
            lock_after_win: false,
        }
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
