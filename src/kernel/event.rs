use serde::{Deserialize, Serialize};

use super::resolver::{SegmentUpdate, WordUpdate};
use super::scheduler::WordId;
use super::time::Tick;

/// One recompute, as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameUpdate {
    pub tick: Tick,
    pub current_time: f64,
    pub is_playing: bool,
    /// false: jump straight to the new visuals (seek, reset, completion).
    pub animate: bool,
    pub words: Vec<WordUpdate>,
    pub segments: Vec<SegmentUpdate>,
}

impl FrameUpdate {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.segments.is_empty()
    }
}

/// Visual side of the system. Never reads back into playback.
pub trait Renderer {
    fn render(&mut self, frame: &FrameUpdate);
}

/// Host control commands, serialized through the driver channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    Seek(f64),
    SeekWord(WordId),
    Reset,
    Shutdown,
}

impl Command {
    /// Console syntax: `play`, `pause`, `toggle` (or empty), `seek <secs>`,
    /// `word <segment> <word>`, `reset`, `quit`.
    pub fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();
        let head = match parts.next() {
            Some(head) => head.to_ascii_lowercase(),
            None => return Some(Command::Toggle),
        };

        let command = match head.as_str() {
            "play" => Command::Play,
            "pause" => Command::Pause,
            "toggle" | "t" => Command::Toggle,
            "reset" | "r" => Command::Reset,
            "quit" | "exit" | "q" => Command::Shutdown,
            "seek" | "s" => Command::Seek(parts.next()?.parse().ok()?),
            "word" | "w" => {
                let segment = parts.next()?.parse().ok()?;
                let word = parts.next()?.parse().ok()?;
                Command::SeekWord(WordId::new(segment, word))
            }
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }
        Some(command)
    }
}
