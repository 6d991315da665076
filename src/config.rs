//! Application configuration loaded from TOML.

use crate::games::tictactoe::{FirstMoverPolicy, NotificationKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Top-level configuration for a play session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Who opens the round after a finished one.
    #[serde(default)]
    first_mover_policy: FirstMoverPolicy,

    /// Input polling interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// How long each kind of notification stays on screen.
    #[serde(default)]
    toasts: ToastDurations,
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_mover_policy: FirstMoverPolicy::default(),
            tick_rate_ms: default_tick_rate_ms(),
            toasts: ToastDurations::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(policy = config.first_mover_policy.label(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Replaces the first-mover policy.
    pub fn with_policy(mut self, policy: FirstMoverPolicy) -> Self {
        self.first_mover_policy = policy;
        self
    }

    /// Input polling interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Display time per notification kind, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastDurations {
    /// After `start`.
    new_game_ms: u64,
    /// After `next_round`.
    next_round_ms: u64,
    /// After a win or draw.
    round_over_ms: u64,
    /// After statistics are zeroed.
    stats_reset_ms: u64,
    /// After a full restart.
    game_reset_ms: u64,
}

impl Default for ToastDurations {
    fn default() -> Self {
        Self {
            new_game_ms: 3000,
            next_round_ms: 2000,
            round_over_ms: 4000,
            stats_reset_ms: 2000,
            game_reset_ms: 2000,
        }
    }
}

impl ToastDurations {
    /// How long a notification of `kind` stays visible.
    pub fn for_kind(&self, kind: NotificationKind) -> Duration {
        let ms = match kind {
            NotificationKind::NewGame => self.new_game_ms,
            NotificationKind::NextRound => self.next_round_ms,
            NotificationKind::RoundOver => self.round_over_ms,
            NotificationKind::StatsReset => self.stats_reset_ms,
            NotificationKind::GameReset => self.game_reset_ms,
        };
        Duration::from_millis(ms)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
