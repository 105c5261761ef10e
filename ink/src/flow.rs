//! Preview/confirm flow: gates whether a capture is final or redoable.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::export::Capture;

/// Which screen of the widget is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// The drawing surface is live and accepting strokes.
    #[default]
    Drawing,
    /// A pending capture is displayed for confirmation.
    Previewing,
}

/// State machine between the drawing surface and the preview panel.
///
/// The pending capture slot is last-write-wins: a new capture replaces
/// any capture still pending from an earlier request.
#[derive(Debug, Default)]
pub struct CaptureFlow {
    stage: Stage,
    pending: Option<Capture>,
}

impl CaptureFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The capture awaiting confirmation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Capture> {
        self.pending.as_ref()
    }

    /// Enter the preview with `capture` pending.
    pub fn begin_preview(&mut self, capture: Capture) -> &Capture {
        self.stage = Stage::Previewing;
        self.pending.insert(capture)
    }

    /// Redraw: drop the pending capture and return to drawing. Returns
    /// the discarded capture, if there was one.
    pub fn discard(&mut self) -> Option<Capture> {
        self.stage = Stage::Drawing;
        self.pending.take()
    }

    /// Confirm: hand over the pending capture and return to drawing.
    /// `None` while nothing is pending (a confirm while drawing is a
    /// no-op).
    pub fn confirm(&mut self) -> Option<Capture> {
        let capture = self.pending.take();
        if capture.is_some() {
            self.stage = Stage::Drawing;
        }
        capture
    }
}
