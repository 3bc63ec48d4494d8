use std::io::Write;
use std::sync::Arc;

use tracing::warn;

use crate::kernel::event::{FrameUpdate, Renderer};
use crate::kernel::resolver::VisualState;
use crate::kernel::scheduler::{Segment, Timeline};

const HIGHLIGHT: &str = "\x1b[1;35m";
const READ: &str = "\x1b[2m";
const PLAIN: &str = "\x1b[0m";

/// `MM:SS`, truncating fractions. Negative and NaN read as zero.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 { seconds as u64 } else { 0 };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// One segment as a terminal line. Highlight covers the lead-in and the
/// active span; the trail-out already reads as read.
pub fn render_segment_line(segment: &Segment, states: &[VisualState], ansi: bool) -> String {
    let mut line = format!(
        "[{} / {}] {}: ",
        format_clock(segment.start),
        format_clock(segment.end),
        segment.speaker
    );

    for (i, word) in segment.words.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let state = states.get(i).copied().unwrap_or_default();
        match (ansi, state) {
            (false, VisualState::TransitioningIn | VisualState::Active) => {
                line.push('[');
                line.push_str(&word.text);
                line.push(']');
            }
            (false, _) => line.push_str(&word.text),
            (true, VisualState::TransitioningIn | VisualState::Active) => {
                line.push_str(HIGHLIGHT);
                line.push_str(&word.text);
                line.push_str(PLAIN);
            }
            (true, VisualState::TransitioningOut | VisualState::Past) => {
                line.push_str(READ);
                line.push_str(&word.text);
                line.push_str(PLAIN);
            }
            (true, VisualState::Future) => line.push_str(&word.text),
        }
    }

    line
}

/// Prints the segment being read whenever one of its words changes.
pub struct ConsoleRenderer<W: Write> {
    timeline: Arc<Timeline>,
    states: Vec<Vec<VisualState>>,
    out: W,
    ansi: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(timeline: Arc<Timeline>, out: W, ansi: bool) -> Self {
        let states = timeline
            .segments()
            .iter()
            .map(|s| vec![VisualState::Future; s.words.len()])
            .collect();
        Self {
            timeline,
            states,
            out,
            ansi,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, segment: usize, frame: &FrameUpdate) {
        let Some(seg) = self.timeline.segments().get(segment) else {
            return;
        };
        let line = render_segment_line(seg, &self.states[segment], self.ansi);
        let marker = if frame.is_playing { ">" } else { "=" };
        let clock = format_clock(frame.current_time);
        if let Err(e) = writeln!(self.out, "{} {} {}", clock, marker, line) {
            warn!("Console render failed: {}", e);
        }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, frame: &FrameUpdate) {
        for update in &frame.words {
            if let Some(slot) = self
                .states
                .get_mut(update.id.segment)
                .and_then(|s| s.get_mut(update.id.word))
            {
                *slot = update.state;
            }
        }

        // Focus on the segment being read; forced frames fall back to the
        // segment containing the current time.
        let focus = frame
            .words
            .iter()
            .rev()
            .find(|u| matches!(u.state, VisualState::Active | VisualState::TransitioningIn))
            .map(|u| u.id.segment)
            .or_else(|| {
                if frame.animate {
                    return None;
                }
                let segments = self.timeline.segments();
                segments
                    .iter()
                    .position(|s| frame.current_time < s.end)
                    .or_else(|| segments.len().checked_sub(1))
            });

        if let Some(segment) = focus {
            self.write_line(segment, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(59.9), "00:59");
        assert_eq!(format_clock(61.0), "01:01");
        assert_eq!(format_clock(-3.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
    }
}
