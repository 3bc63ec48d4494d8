use std::collections::VecDeque;

use super::event::TelemetryEvent;
use super::metrics::{compute_snapshot, TelemetrySnapshot};

/// Default bound on retained playback events.
pub const MAX_EVENTS: usize = 10_000;

/// Bounded log of playback events, owned by the controller.
/// Once full, the oldest event is evicted for each new one.
#[derive(Debug)]
pub struct TelemetryRecorder {
    log: VecDeque<TelemetryEvent>,
    limit: usize,
    evicted: u64,
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self::with_limit(MAX_EVENTS)
    }

    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            log: VecDeque::with_capacity(limit.min(1024)),
            limit,
            evicted: 0,
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        while self.log.len() >= self.limit {
            self.log.pop_front();
            self.evicted += 1;
        }
        self.log.push_back(event);
    }

    /// Retained events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &TelemetryEvent> {
        self.log.iter()
    }

    /// Events pushed out by the limit since creation or the last clear.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Counts over the retained events only.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        compute_snapshot(&self.log)
    }

    pub fn clear(&mut self) {
        self.log.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_past_limit() {
        let mut recorder = TelemetryRecorder::with_limit(2);
        recorder.record(TelemetryEvent::Reset);
        recorder.record(TelemetryEvent::Completed { duration: 1.0 });
        recorder.record(TelemetryEvent::Completed { duration: 2.0 });

        assert_eq!(recorder.evicted(), 1);
        assert_eq!(recorder.snapshot().resets, 0);
        assert_eq!(recorder.snapshot().completions, 2);

        recorder.clear();
        assert_eq!(recorder.events().count(), 0);
        assert_eq!(recorder.evicted(), 0);
    }
}
