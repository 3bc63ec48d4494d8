use std::path::Path;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;
use crate::kernel::rate::{RateModel, DEFAULT_CHARACTERS_PER_MINUTE};
use crate::kernel::resolver::TransitionWindows;
use crate::kernel::time::FRAME_MS;

pub const CONFIG_ENV: &str = "READALONG_CONFIG";
pub const CPM_ENV: &str = "READALONG_CPM";

/// Highlighter settings. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlighterConfig {
    pub characters_per_minute: f64,
    /// Lead before a word starts during which it reads TransitioningIn.
    pub transition_in_secs: f64,
    /// Trail after a word ends during which it reads TransitioningOut.
    pub transition_out_secs: f64,
    pub frame_interval_ms: u64,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            characters_per_minute: DEFAULT_CHARACTERS_PER_MINUTE,
            transition_in_secs: 0.05,
            transition_out_secs: 0.6,
            frame_interval_ms: FRAME_MS,
        }
    }
}

impl HighlighterConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// File named by `READALONG_CONFIG` (or defaults), then `READALONG_CPM` on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(CPM_ENV) {
            config.characters_per_minute = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidRateOverride(raw.clone()))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rate()?;
        self.windows()?;
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::InvalidFrameInterval);
        }
        Ok(())
    }

    pub fn rate(&self) -> Result<RateModel, ConfigError> {
        RateModel::new(self.characters_per_minute)
    }

    pub fn windows(&self) -> Result<TransitionWindows, ConfigError> {
        TransitionWindows::new(self.transition_in_secs, self.transition_out_secs)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
