//! Optional configuration for the Parlour binaries.
//!
//! The file lives at `~/.parlour/config.toml` unless `PARLOUR_CONFIG` points
//! elsewhere. Every field is optional; a missing file means the classic rules.
//!
//! ```toml
//! [guess]
//! low = 1
//! high = 20
//! max_attempts = 6
//!
//! [magic8ball]
//! delay_ms = 3000
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use parlour_types::{AttemptLimit, GuessRange, GuessRules, RulesError};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "PARLOUR_CONFIG";

/// Pause between "Thinking...." and the answer when nothing is configured.
pub const DEFAULT_MAGIC8BALL_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParlourConfig {
    pub guess: Option<GuessConfig>,
    pub magic8ball: Option<Magic8BallConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuessConfig {
    pub low: Option<i64>,
    pub high: Option<i64>,
    pub max_attempts: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Magic8BallConfig {
    /// Delay before the answer is revealed, in milliseconds.
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {source}", path.display())]
    Invalid { path: PathBuf, source: RulesError },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

impl ParlourConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load and validate the config at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        let config: Self = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        // Rules must be playable before any game starts.
        if let Err(err) = config.guess_rules() {
            tracing::warn!("Invalid guess rules in config at {:?}: {}", path, err);
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                source: err,
            });
        }

        tracing::info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Guessing game rules, with unset fields falling back to the defaults.
    pub fn guess_rules(&self) -> Result<GuessRules, RulesError> {
        let guess = self.guess.as_ref();
        let low = guess
            .and_then(|g| g.low)
            .unwrap_or(GuessRange::DEFAULT_LOW);
        let high = guess
            .and_then(|g| g.high)
            .unwrap_or(GuessRange::DEFAULT_HIGH);
        let attempts = guess
            .and_then(|g| g.max_attempts)
            .unwrap_or(AttemptLimit::DEFAULT);
        GuessRules::new(low, high, attempts)
    }

    #[must_use]
    pub fn magic8ball_delay(&self) -> Duration {
        self.magic8ball
            .as_ref()
            .and_then(|m| m.delay_ms)
            .map_or(DEFAULT_MAGIC8BALL_DELAY, Duration::from_millis)
    }
}

/// Resolve the config file path: `$PARLOUR_CONFIG`, else `~/.parlour/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(raw) = env::var(CONFIG_PATH_ENV)
        && !raw.trim().is_empty()
    {
        return Some(PathBuf::from(raw));
    }
    parlour_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.parlour`, the home of the config file and logs.
#[must_use]
pub fn parlour_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".parlour"))
}
