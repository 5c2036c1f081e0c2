//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::{Seat, SeatConfig};
use tracing::{debug, info, instrument};

/// Seats, pacing and seed for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Who controls each player.
    #[serde(default)]
    seats: SeatConfig,

    /// Pause before each computer move when no human plays.
    #[serde(default = "default_pacing_ms")]
    pacing_ms: u64,

    /// Seed for the heuristic strategy's random fallback.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_pacing_ms() -> u64 {
    1000
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// One of the four classic pairings, applied before `one`/`two`.
    pub preset: Option<SeatConfig>,
    /// Player one's seat.
    pub one: Option<Seat>,
    /// Player two's seat.
    pub two: Option<Seat>,
    /// Pacing in milliseconds.
    pub pacing_ms: Option<u64>,
    /// Heuristic seed.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(seats: SeatConfig, pacing_ms: u64, seed: Option<u64>) -> Self {
        Self {
            seats,
            pacing_ms,
            seed,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(one = %config.seats.one, two = %config.seats.two, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(preset) = overrides.preset {
            self.seats = preset;
        }
        if let Some(one) = overrides.one {
            self.seats.one = one;
        }
        if let Some(two) = overrides.two {
            self.seats.two = two;
        }
        if let Some(pacing_ms) = overrides.pacing_ms {
            self.pacing_ms = pacing_ms;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Pacing as a duration.
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(SeatConfig::default(), default_pacing_ms(), None)
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
