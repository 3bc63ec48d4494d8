use std::sync::{Arc, Mutex};

use crate::kernel::event::{FrameUpdate, Renderer};

/// Renderer that keeps every frame. Clones share the same buffer, so a
/// test can hold one handle while the controller owns the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<FrameUpdate>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<FrameUpdate> {
        match self.frames.lock() {
            Ok(frames) => frames.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<FrameUpdate> {
        self.frames().pop()
    }

    pub fn len(&self) -> usize {
        self.frames().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut frames) = self.frames.lock() {
            frames.clear();
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameUpdate) {
        match self.frames.lock() {
            Ok(mut frames) => frames.push(frame.clone()),
            Err(poisoned) => poisoned.into_inner().push(frame.clone()),
        }
    }
}
