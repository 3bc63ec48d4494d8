pub mod config;
pub mod error;
pub mod kernel;
pub mod outputs;
pub mod script;

// Common entry points
pub use config::HighlighterConfig;
pub use error::{ConfigError, ScriptError};
pub use kernel::controller::{PlaybackController, TickOutcome};
pub use kernel::driver::PlaybackDriver;
pub use kernel::resolver::{resolve_word_state, segment_progress, TransitionWindows, VisualState};
pub use kernel::scheduler::{ScriptScheduler, Timeline, Turn};
