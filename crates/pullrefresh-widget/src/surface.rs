#![forbid(unsafe_code)]

//! Rendering hand-off.
//!
//! The widget never draws. It hands an [`IndicatorFrame`] to whatever
//! [`IndicatorSurface`] the host attached. With no surface attached, frames
//! are simply not delivered.

use std::sync::{Arc, Mutex};

use pullrefresh_core::{IndicatorPosition, IndicatorView};

/// Live-region politeness for the indicator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Announce {
    /// Text changes are announced immediately.
    #[default]
    Assertive,
    /// Announcements are muted (briefly, after a reset).
    Off,
}

/// Everything a renderer needs for one indicator update.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub view: IndicatorView,
    pub position: IndicatorPosition,
    pub announce: Announce,
    /// Suppress text selection styling on the content.
    pub selection_disabled: bool,
    /// Effective language tag, for the renderer's `lang` attribute.
    pub lang: String,
}

/// Receiver of indicator frames.
pub trait IndicatorSurface {
    fn apply(&mut self, frame: &IndicatorFrame);
}

impl<F> IndicatorSurface for F
where
    F: FnMut(&IndicatorFrame),
{
    fn apply(&mut self, frame: &IndicatorFrame) {
        self(frame);
    }
}

/// Surface that keeps every frame it receives.
///
/// Clones share the recorded frames, so a host can keep one clone while the
/// widget owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    frames: Arc<Mutex<Vec<IndicatorFrame>>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> Vec<IndicatorFrame> {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The most recent frame.
    #[must_use]
    pub fn last(&self) -> Option<IndicatorFrame> {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl IndicatorSurface for RecordingSurface {
    fn apply(&mut self, frame: &IndicatorFrame) {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(frame.clone());
    }
}
