use serde::{Deserialize, Serialize};

use super::transport::TransportState;

/// Strict state delta. This is the ONLY way playback state mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateDelta {
    /// Transport started; `anchor` is the wall-clock second at which media time 0 lies.
    Started { anchor: f64 },
    /// Transport stopped; the clock freezes at the current time.
    Stopped,
    /// Jump while paused: current time and resume point both move.
    Moved(f64),
    /// Tick progress while playing.
    Advanced(f64),
    /// Next play starts from 0, current time stays where it is.
    Rewound,
}

/// Simulated playback clock. Owned by the controller only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub current_time: f64,
    pub transport: TransportState,
    pub paused_at: f64,
    pub anchor: Option<f64>,
    /// Monotonic generation for ticket validation. Bumped on every
    /// transport or position change, never on plain tick progress.
    pub epoch: u64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            transport: TransportState::Paused,
            paused_at: 0.0,
            anchor: None,
            epoch: 0,
        }
    }
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Playing
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        match delta {
            StateDelta::Started { anchor } => {
                self.epoch += 1;
                self.transport = TransportState::Playing;
                self.anchor = Some(anchor);
            }
            StateDelta::Stopped => {
                self.epoch += 1;
                self.transport = TransportState::Paused;
                self.paused_at = self.current_time;
                self.anchor = None;
            }
            StateDelta::Moved(time) => {
                self.epoch += 1;
                self.current_time = time;
                self.paused_at = time;
            }
            StateDelta::Advanced(time) => {
                self.current_time = time;
            }
            StateDelta::Rewound => {
                self.epoch += 1;
                self.paused_at = 0.0;
            }
        }
    }
}
