use serde::{Deserialize, Serialize};

use super::scheduler::{Segment, SegmentId, Timeline, Word, WordId};
use crate::error::ConfigError;

/// Per-word visual category. Ordered by reading progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VisualState {
    Future,
    TransitioningIn,
    Active,
    TransitioningOut,
    Past,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::Future
    }
}

/// Lead and trail durations, in seconds, around a word's active span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWindows")]
pub struct TransitionWindows {
    in_window: f64,
    out_window: f64,
}

impl TransitionWindows {
    /// Degenerate three-state model: Future, Active, Past.
    pub const NONE: Self = Self {
        in_window: 0.0,
        out_window: 0.0,
    };

    pub fn new(in_window: f64, out_window: f64) -> Result<Self, ConfigError> {
        check_window("in", in_window)?;
        check_window("out", out_window)?;
        Ok(Self {
            in_window,
            out_window,
        })
    }

    pub fn in_window(&self) -> f64 {
        self.in_window
    }

    pub fn out_window(&self) -> f64 {
        self.out_window
    }
}

/// Unchecked wire form. Deserializing goes through `TransitionWindows::new`.
#[derive(Deserialize)]
struct RawWindows {
    in_window: f64,
    out_window: f64,
}

impl TryFrom<RawWindows> for TransitionWindows {
    type Error = ConfigError;

    fn try_from(raw: RawWindows) -> Result<Self, Self::Error> {
        Self::new(raw.in_window, raw.out_window)
    }
}

impl Default for TransitionWindows {
    fn default() -> Self {
        Self::NONE
    }
}

fn check_window(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWindow { name, value })
    }
}

/// Pure function: (Word span, Time) -> VisualState.
/// Half-open intervals, first match wins. NaN time reads as Future.
pub fn resolve_word_state(
    word: &Word,
    current_time: f64,
    windows: TransitionWindows,
) -> VisualState {
    let lead = word.start - windows.in_window;
    let trail = word.end + windows.out_window;

    if current_time.is_nan() || current_time < lead {
        VisualState::Future
    } else if current_time < word.start {
        VisualState::TransitioningIn
    } else if current_time < word.end {
        VisualState::Active
    } else if current_time < trail {
        VisualState::TransitioningOut
    } else {
        VisualState::Past
    }
}

/// Fraction of the segment elapsed, clamped to [0, 1].
pub fn segment_progress(segment: &Segment, current_time: f64) -> f64 {
    if current_time.is_nan() {
        return 0.0;
    }
    let duration = segment.duration();
    if duration <= 0.0 {
        return if current_time >= segment.start { 1.0 } else { 0.0 };
    }
    ((current_time - segment.start) / duration).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordUpdate {
    pub id: WordId,
    pub state: VisualState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentUpdate {
    pub id: SegmentId,
    pub progress: f64,
    pub complete: bool,
}

impl SegmentUpdate {
    fn new(id: SegmentId, progress: f64) -> Self {
        Self {
            id,
            progress,
            complete: progress >= 1.0,
        }
    }
}

/// Last state reported to the renderer, per word and per segment.
/// Used to turn a full recompute into a delta.
#[derive(Debug, Clone)]
pub struct StateTracker {
    words: Vec<Vec<VisualState>>,
    progress: Vec<f64>,
}

impl StateTracker {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            words: timeline
                .segments()
                .iter()
                .map(|s| vec![VisualState::Future; s.words.len()])
                .collect(),
            progress: vec![0.0; timeline.segments().len()],
        }
    }

    pub fn word_state(&self, id: WordId) -> Option<VisualState> {
        self.words.get(id.segment)?.get(id.word).copied()
    }

    pub fn segment_progress(&self, id: SegmentId) -> Option<f64> {
        self.progress.get(id.0).copied()
    }

    /// Recompute everything at `time`. When `changed_only` is set, entries
    /// equal to the last report are left out.
    pub fn recompute(
        &mut self,
        timeline: &Timeline,
        time: f64,
        windows: TransitionWindows,
        changed_only: bool,
    ) -> (Vec<WordUpdate>, Vec<SegmentUpdate>) {
        let mut words = Vec::new();
        let mut segments = Vec::new();

        for (si, segment) in timeline.segments().iter().enumerate() {
            for (wi, word) in segment.words.iter().enumerate() {
                let state = resolve_word_state(word, time, windows);
                let slot = &mut self.words[si][wi];
                if !changed_only || *slot != state {
                    *slot = state;
                    words.push(WordUpdate {
                        id: WordId::new(si, wi),
                        state,
                    });
                }
            }

            let progress = segment_progress(segment, time);
            let slot = &mut self.progress[si];
            if !changed_only || *slot != progress {
                *slot = progress;
                segments.push(SegmentUpdate::new(SegmentId(si), progress));
            }
        }

        (words, segments)
    }

    /// Force every word to `state` and every segment to `progress`,
    /// regardless of what the resolver would say.
    pub fn fill(
        &mut self,
        state: VisualState,
        progress: f64,
    ) -> (Vec<WordUpdate>, Vec<SegmentUpdate>) {
        let mut words = Vec::new();
        for (si, states) in self.words.iter_mut().enumerate() {
            for (wi, slot) in states.iter_mut().enumerate() {
                *slot = state;
                words.push(WordUpdate {
                    id: WordId::new(si, wi),
                    state,
                });
            }
        }

        let segments = self
            .progress
            .iter_mut()
            .enumerate()
            .map(|(si, slot)| {
                *slot = progress;
                SegmentUpdate::new(SegmentId(si), progress)
            })
            .collect();

        (words, segments)
    }
}
