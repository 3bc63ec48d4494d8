use serde::{Serialize, Deserialize};

/// Controller states of the simulated transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportState {
    /// Clock frozen at `paused_at`. No frames pending.
    Paused,
    /// Clock follows wall time from the anchor. One frame pending.
    Playing,
}

impl Default for TransportState {
    fn default() -> Self {
        Self::Paused
    }
}

/// Requests for a transport transition.
/// These are REQUESTS, not forces. The graph validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportRequest {
    Play,
    Pause,
    Toggle,
}

pub struct TransportGraph;

impl TransportGraph {
    /// Pure function: (Current State, Request) -> New State
    /// Returns None if the transition is illegal; callers treat that as a no-op.
    pub fn transition(
        current: TransportState,
        request: TransportRequest,
    ) -> Option<TransportState> {
        use TransportRequest::*;
        use TransportState::*;

        match (current, request) {
            (Paused, Play) | (Paused, Toggle) => Some(Playing),
            (Playing, Pause) | (Playing, Toggle) => Some(Paused),
            // Double clicks: play while playing, pause while paused
            _ => None,
        }
    }
}
