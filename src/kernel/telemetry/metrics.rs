use std::collections::VecDeque;
use serde::{Serialize, Deserialize};
use super::event::TelemetryEvent;
use crate::kernel::transport::TransportState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub transport_stats: TransportStats,
    pub seek_stats: SeekStats,
    pub frame_stats: FrameStats,
    pub completions: u64,
    pub resets: u64,
    pub stale_ticks: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportStats {
    pub plays: u64,
    pub pauses: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeekStats {
    pub count: u64,
    pub clamped: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameStats {
    pub animated: u64,
    pub forced: u64,
    pub word_updates: u64,
    pub avg_words_per_animated_frame: f64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut animated_words = 0u64;

    for event in events {
        match event {
            TelemetryEvent::TransportTransition { to, .. } => match to {
                TransportState::Playing => snap.transport_stats.plays += 1,
                TransportState::Paused => snap.transport_stats.pauses += 1,
            },
            TelemetryEvent::Seek { requested, applied } => {
                snap.seek_stats.count += 1;
                // NaN requests are clamped too
                if requested != applied {
                    snap.seek_stats.clamped += 1;
                }
            }
            TelemetryEvent::Completed { .. } => snap.completions += 1,
            TelemetryEvent::Reset => snap.resets += 1,
            TelemetryEvent::StaleTick { .. } => snap.stale_ticks += 1,
            TelemetryEvent::FrameEmitted { words, animated, .. } => {
                snap.frame_stats.word_updates += *words as u64;
                if *animated {
                    snap.frame_stats.animated += 1;
                    animated_words += *words as u64;
                } else {
                    snap.frame_stats.forced += 1;
                }
            }
        }
    }

    if snap.frame_stats.animated > 0 {
        snap.frame_stats.avg_words_per_animated_frame =
            animated_words as f64 / snap.frame_stats.animated as f64;
    }

    snap
}
