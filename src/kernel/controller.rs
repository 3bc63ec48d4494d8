use std::sync::Arc;

use tracing::{debug, info};

use super::cancel::{FrameScheduler, FrameTicket, PendingFrames};
use super::event::{Command, FrameUpdate, Renderer};
use super::resolver::{SegmentUpdate, StateTracker, TransitionWindows, VisualState, WordUpdate};
use super::scheduler::{Timeline, WordId};
use super::state::{PlaybackState, StateDelta};
use super::telemetry::event::TelemetryEvent;
use super::telemetry::recorder::TelemetryRecorder;
use super::time::{Clock, Tick};
use super::transport::{TransportGraph, TransportRequest, TransportState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Ticket superseded, or transport already paused. Nothing happened.
    Stale,
    /// Time advanced, next frame requested.
    Continued,
    /// End of timeline reached. Transport paused and rewound.
    Completed,
}

/// Simulated transport over a static timeline.
///
/// Not designed for concurrent mutation: hosts with several threads must
/// serialize calls (the async driver does this with a channel).
pub struct PlaybackController<C, F, R>
where
    C: Clock,
    F: FrameScheduler,
    R: Renderer,
{
    timeline: Arc<Timeline>,
    windows: TransitionWindows,
    clock: C,
    frames: F,
    renderer: R,
    state: PlaybackState,
    tracker: StateTracker,
    tick: Tick,
    pub telemetry: TelemetryRecorder,
}

impl<C, F, R> PlaybackController<C, F, R>
where
    C: Clock,
    F: FrameScheduler,
    R: Renderer,
{
    pub fn new(
        timeline: Arc<Timeline>,
        windows: TransitionWindows,
        clock: C,
        frames: F,
        renderer: R,
    ) -> Self {
        let tracker = StateTracker::new(&timeline);
        Self {
            timeline,
            windows,
            clock,
            frames,
            renderer,
            state: PlaybackState::new(),
            tracker,
            tick: Tick::new(),
            telemetry: TelemetryRecorder::new(),
        }
    }

    pub fn current_time(&self) -> f64 {
        self.state.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn total_duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    pub fn timeline(&self) -> &Arc<Timeline> {
        &self.timeline
    }

    pub fn windows(&self) -> TransitionWindows {
        self.windows
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Last state reported to the renderer for `id`.
    pub fn word_state(&self, id: WordId) -> Option<VisualState> {
        self.tracker.word_state(id)
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn play(&mut self) {
        if !self.request(TransportRequest::Play) {
            return;
        }
        let anchor = self.now_secs() - self.state.paused_at;
        self.state.reduce(StateDelta::Started { anchor });
        self.frames.request_frame(FrameTicket { epoch: self.state.epoch });
    }

    pub fn pause(&mut self) {
        if !self.request(TransportRequest::Pause) {
            return;
        }
        self.state.reduce(StateDelta::Stopped);
    }

    /// Returns the new `is_playing`.
    pub fn toggle(&mut self) -> bool {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
        self.is_playing()
    }

    pub fn seek(&mut self, target: f64) {
        let total = self.total_duration();
        let applied = if target.is_nan() { 0.0 } else { target.clamp(0.0, total) };
        self.telemetry.record(TelemetryEvent::Seek { requested: target, applied });

        let was_playing = self.is_playing();
        self.pause();
        self.state.reduce(StateDelta::Moved(applied));

        // A jump can cross many boundaries: show the result, not the path.
        let (words, segments) =
            self.tracker.recompute(&self.timeline, applied, self.windows, false);
        self.emit(words, segments, false);

        if was_playing {
            self.play();
        }
    }

    /// Click-to-seek on a word. Unknown ids are ignored.
    pub fn seek_to_word(&mut self, id: WordId) {
        match self.timeline.word(id).map(|word| word.start) {
            Some(start) => self.seek(start),
            None => debug!("seek_to_word ignored: no word at {:?}", id),
        }
    }

    pub fn reset(&mut self) {
        self.pause();
        self.state.reduce(StateDelta::Moved(0.0));
        self.telemetry.record(TelemetryEvent::Reset);

        // Not through the resolver: with a lead window the first word
        // would read TransitioningIn at time 0.
        let (words, segments) = self.tracker.fill(VisualState::Future, 0.0);
        self.emit(words, segments, false);
    }

    /// One frame of the playback loop.
    ///
    /// Stale tickets (issued before the last play/pause/seek/reset) are dropped
    /// before touching any state.
    pub fn tick(&mut self, ticket: FrameTicket) -> TickOutcome {
        let anchor = match self.state.anchor {
            Some(anchor) if self.is_playing() && ticket.is_current(self.state.epoch) => anchor,
            _ => {
                debug!("Dropped stale tick: epoch {} vs {}", ticket.epoch, self.state.epoch);
                self.telemetry.record(TelemetryEvent::StaleTick {
                    ticket_epoch: ticket.epoch,
                    current_epoch: self.state.epoch,
                });
                return TickOutcome::Stale;
            }
        };

        let elapsed = self.now_secs() - anchor;
        let total = self.total_duration();

        if elapsed >= total {
            self.state.reduce(StateDelta::Advanced(total));
            self.pause();

            let (words, segments) = self.tracker.fill(VisualState::Past, 1.0);
            self.emit(words, segments, false);

            // Auto-rewind: the next play starts over.
            self.state.reduce(StateDelta::Rewound);
            self.telemetry.record(TelemetryEvent::Completed { duration: total });
            info!("Playback completed at {:.2}s", total);
            return TickOutcome::Completed;
        }

        self.state.reduce(StateDelta::Advanced(elapsed));
        let (words, segments) = self.tracker.recompute(&self.timeline, elapsed, self.windows, true);
        if !words.is_empty() || !segments.is_empty() {
            self.emit(words, segments, true);
        }
        self.frames.request_frame(ticket);
        TickOutcome::Continued
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Toggle => {
                self.toggle();
            }
            Command::Seek(target) => self.seek(target),
            Command::SeekWord(id) => self.seek_to_word(id),
            Command::Reset => self.reset(),
            Command::Shutdown => self.pause(),
        }
    }

    /// Validate against the transport graph; logs and records legal transitions.
    fn request(&mut self, request: TransportRequest) -> bool {
        let from = self.state.transport;
        match TransportGraph::transition(from, request) {
            Some(to) => {
                info!("Transport {:?} -> {:?} at {:.2}s", from, to, self.state.current_time);
                self.telemetry.record(TelemetryEvent::TransportTransition {
                    from,
                    to,
                    at: self.state.current_time,
                });
                true
            }
            None => {
                debug!("Ignored {:?} while {:?}", request, from);
                false
            }
        }
    }

    fn emit(&mut self, words: Vec<WordUpdate>, segments: Vec<SegmentUpdate>, animate: bool) {
        self.tick = self.tick.next();
        self.telemetry.record(TelemetryEvent::FrameEmitted {
            tick: self.tick,
            words: words.len(),
            segments: segments.len(),
            animated: animate,
        });

        let frame = FrameUpdate {
            tick: self.tick,
            current_time: self.state.current_time,
            is_playing: self.state.transport == TransportState::Playing,
            animate,
            words,
            segments,
        };
        self.renderer.render(&frame);
    }

    fn now_secs(&self) -> f64 {
        self.clock.now().as_secs_f64()
    }
}

impl<C, R> PlaybackController<C, PendingFrames, R>
where
    C: Clock,
    R: Renderer,
{
    /// Run every frame requested so far. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let due = self.frames.drain();
        let count = due.len();
        for ticket in due {
            self.tick(ticket);
        }
        count
    }
}
