use serde::{Serialize, Deserialize};
use crate::kernel::time::Tick;
use crate::kernel::transport::TransportState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    TransportTransition {
        from: TransportState,
        to: TransportState,
        at: f64,
    },

    Seek {
        requested: f64,
        applied: f64,
    },

    Completed {
        duration: f64,
    },

    Reset,

    /// A queued tick arrived after its epoch was superseded.
    StaleTick {
        ticket_epoch: u64,
        current_epoch: u64,
    },

    FrameEmitted {
        tick: Tick,
        words: usize,
        segments: usize,
        animated: bool,
    },
}
