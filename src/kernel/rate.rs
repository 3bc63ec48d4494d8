use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CHARACTERS_PER_MINUTE: f64 = 1000.0;

/// Reading speed. Converts text length into time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRate")]
pub struct RateModel {
    characters_per_minute: f64,
}

impl RateModel {
    pub fn new(characters_per_minute: f64) -> Result<Self, ConfigError> {
        // Subnormal rates would overflow seconds_per_char to infinity.
        if !characters_per_minute.is_finite()
            || characters_per_minute <= 0.0
            || !(60.0 / characters_per_minute).is_finite()
        {
            return Err(ConfigError::InvalidRate(characters_per_minute));
        }
        Ok(Self { characters_per_minute })
    }

    pub fn characters_per_minute(&self) -> f64 {
        self.characters_per_minute
    }

    pub fn seconds_per_char(&self) -> f64 {
        60.0 / self.characters_per_minute
    }
}

/// Unchecked wire form. Deserializing goes through `RateModel::new`.
#[derive(Deserialize)]
struct RawRate {
    characters_per_minute: f64,
}

impl TryFrom<RawRate> for RateModel {
    type Error = ConfigError;

    fn try_from(raw: RawRate) -> Result<Self, Self::Error> {
        Self::new(raw.characters_per_minute)
    }
}

impl Default for RateModel {
    fn default() -> Self {
        Self {
            characters_per_minute: DEFAULT_CHARACTERS_PER_MINUTE,
        }
    }
}
