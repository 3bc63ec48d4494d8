use serde::{Deserialize, Serialize};

use super::rate::RateModel;
use crate::error::ConfigError;

/// One speaker's contiguous block of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub text: String,
}

impl Turn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub usize);

/// Index of a word inside the immutable timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId {
    pub segment: usize,
    pub word: usize,
}

impl WordId {
    pub fn new(segment: usize, word: usize) -> Self {
        Self { segment, word }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub speaker: String,
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub words: Vec<Word>,
}

impl Segment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Static reading schedule. Built once, never mutated.
/// Only `ScriptScheduler` constructs one, so it is serialize-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
    total_duration: f64,
}

impl Timeline {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.0)
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.segments.get(id.segment)?.words.get(id.word)
    }

    pub fn word_count(&self) -> usize {
        self.segments.iter().map(|s| s.words.len()).sum()
    }

    /// Every word paired with its id, in reading order.
    pub fn words(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.segments.iter().enumerate().flat_map(|(si, segment)| {
            segment
                .words
                .iter()
                .enumerate()
                .map(move |(wi, word)| (WordId::new(si, wi), word))
        })
    }
}

fn visible_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

pub struct ScriptScheduler;

impl ScriptScheduler {
    /// Pure projection: Turns + Rate -> Timeline.
    ///
    /// Whitespace carries no time. Word boundaries come from a prefix sum
    /// over visible character counts, so consecutive words always touch.
    pub fn build_timeline(turns: &[Turn], rate: RateModel) -> Timeline {
        let spc = rate.seconds_per_char();
        let mut segments = Vec::with_capacity(turns.len());
        let mut cursor = 0.0;

        for turn in turns {
            let tokens: Vec<&str> = turn.text.split_whitespace().collect();
            let counts: Vec<usize> = tokens.iter().map(|t| visible_chars(t)).collect();
            let total_chars: usize = counts.iter().sum();

            let start = cursor;
            let end = start + total_chars as f64 * spc;

            let mut prefix = 0usize;
            let words = tokens
                .iter()
                .zip(&counts)
                .map(|(token, &chars)| {
                    let word_start = start + prefix as f64 * spc;
                    prefix += chars;
                    Word {
                        text: (*token).to_string(),
                        start: word_start,
                        end: start + prefix as f64 * spc,
                        char_count: chars,
                    }
                })
                .collect();

            segments.push(Segment {
                speaker: turn.speaker.clone(),
                text: turn.text.clone(),
                start,
                end,
                words,
            });
            cursor = end;
        }

        Timeline {
            total_duration: cursor,
            segments,
        }
    }

    pub fn build_timeline_with_cpm(
        turns: &[Turn],
        characters_per_minute: f64,
    ) -> Result<Timeline, ConfigError> {
        let rate = RateModel::new(characters_per_minute)?;
        Ok(Self::build_timeline(turns, rate))
    }
}
