use thiserror::Error;

/// Construction-time failures. Playback itself never fails.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("characters per minute must be positive and finite, got {0}")]
    InvalidRate(f64),

    #[error("READALONG_CPM must be a number, got '{0}'")]
    InvalidRateOverride(String),

    #[error("{name} transition window must be non-negative and finite, got {value}")]
    InvalidWindow { name: &'static str, value: f64 },

    #[error("frame interval must be at least 1ms")]
    InvalidFrameInterval,

    #[error("Config read: {0}")]
    Read(#[from] std::io::Error),

    #[error("Config parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Script loading errors.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Script read: {0}")]
    Read(#[from] std::io::Error),

    #[error("Script parse: {0}")]
    Parse(#[from] serde_json::Error),
}
