use crate::controller::TickTiming;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default countdown: one 25 minute pomodoro
pub const DEFAULT_DURATION_SECS: u64 = 25 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duration must be at least one second")]
    ZeroDuration,
}

/// Settings stored in config.json.
///
/// Tick timing is not configurable: the countdown always moves once per
/// second, first a full second after start. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_duration")]
    pub duration_secs: u64,
    /// Start counting as soon as the window opens
    #[serde(default = "default_true")]
    pub autostart: bool,
    /// Desktop notification when the countdown finishes
    #[serde(default = "default_true")]
    pub notify: bool,
}

fn default_duration() -> u64 {
    DEFAULT_DURATION_SECS
}

fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration(),
            autostart: true,
            notify: true,
        }
    }
}

impl TimerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    pub fn timing(&self) -> TickTiming {
        TickTiming::default()
    }
}

/// Load config from a JSON file; a missing file yields defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TimerConfig> {
    let path = path.as_ref();
    let config = match crate::persistence::read_file(path)? {
        Some(content) => serde_json::from_str::<TimerConfig>(&content)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => TimerConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Save config to a JSON file
pub fn save_config<P: AsRef<Path>>(path: P, config: &TimerConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
