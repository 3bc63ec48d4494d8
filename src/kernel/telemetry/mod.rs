//! Playback telemetry.
//!
//! # INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside playback decisions (controller, resolver, driver).
//! It exists solely for observability and verification.
//!
//! Events carry ids, times and counts only, never script text.

pub mod event;
pub mod metrics;
pub mod recorder;
