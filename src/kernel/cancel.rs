use std::collections::VecDeque;

/// Permission for one future tick. Only valid while the playback epoch
/// it was issued under is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTicket {
    pub epoch: u64,
}

impl FrameTicket {
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }
}

/// "Run on next frame" primitive. There is no cancel: a queued ticket
/// goes stale when the epoch moves on, and the tick body drops it.
pub trait FrameScheduler {
    fn request_frame(&mut self, ticket: FrameTicket);
}

/// Queue of requested frames, drained by whoever drives the loop
/// (the async driver, or a test stepping by hand).
#[derive(Debug, Default)]
pub struct PendingFrames {
    queue: VecDeque<FrameTicket>,
}

impl PendingFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take everything requested so far. Frames requested while the
    /// returned tickets run land in the next drain.
    pub fn drain(&mut self) -> Vec<FrameTicket> {
        self.queue.drain(..).collect()
    }
}

impl FrameScheduler for PendingFrames {
    fn request_frame(&mut self, ticket: FrameTicket) {
        self.queue.push_back(ticket);
    }
}
