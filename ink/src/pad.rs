//! Top-level widget state.
//!
//! `PadCore` owns the surface, pen, stroke gesture, and preview flow as
//! one explicit state struct — no drawing state lives outside it. The
//! client forwards DOM events here and blits the surface afterwards, so
//! everything in this module is exercised by native tests without a
//! browser.

#[cfg(test)]
#[path = "pad_test.rs"]
mod pad_test;

use crate::color::Rgb;
use crate::export::{self, Capture, ExportError};
use crate::flow::{CaptureFlow, Stage};
use crate::geom::Point;
use crate::stroke::{Pen, StrokeCapturer};
use crate::surface::Surface;

/// Why a capture request was rejected.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The surface has no ink; there is nothing to submit.
    #[error("surface has no ink")]
    EmptySurface,
    /// PNG encoding failed.
    #[error(transparent)]
    Encode(#[from] ExportError),
}

/// The complete drawing-widget state.
#[derive(Debug)]
pub struct PadCore {
    surface: Surface,
    pen: Pen,
    stroke: StrokeCapturer,
    flow: CaptureFlow,
}

impl PadCore {
    /// Create a pad sized for the given CSS dimensions and device pixel
    /// ratio.
    #[must_use]
    pub fn new(logical_width: f64, logical_height: f64, dpr: f64) -> Self {
        Self {
            surface: Surface::new(logical_width, logical_height, dpr),
            pen: Pen::default(),
            stroke: StrokeCapturer::new(),
            flow: CaptureFlow::new(),
        }
    }

    // --- Queries ---

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Current pen settings.
    #[must_use]
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Active flow stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.flow.stage()
    }

    /// The capture awaiting confirmation, if any.
    #[must_use]
    pub fn pending_capture(&self) -> Option<&Capture> {
        self.flow.pending()
    }

    /// Whether the surface holds any drawn content.
    #[must_use]
    pub fn has_ink(&self) -> bool {
        self.surface.has_ink()
    }

    /// Whether a stroke is currently live.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    // --- Pen controls ---

    /// Set the pen width, clamped to the supported range.
    pub fn set_pen_width(&mut self, width: f64) {
        self.pen.width = Pen::clamp_width(width);
    }

    /// Set the pen color.
    pub fn set_pen_color(&mut self, color: Rgb) {
        self.pen.color = color;
    }

    // --- Pointer input (logical coordinates) ---

    /// Begin a stroke. Ignored while the preview is showing.
    pub fn pointer_down(&mut self, at: Point) {
        if self.flow.stage() == Stage::Previewing {
            return;
        }
        self.stroke.begin(at);
    }

    /// Extend the active stroke. Returns `true` when the surface
    /// changed and a re-blit is needed.
    pub fn pointer_move(&mut self, to: Point) -> bool {
        self.stroke.extend(&mut self.surface, &self.pen, to)
    }

    /// End the active stroke, if any.
    pub fn pointer_up(&mut self) {
        self.stroke.end();
    }

    // --- Surface lifecycle ---

    /// Clear the surface back to opaque white. Ends any active stroke.
    pub fn clear(&mut self) {
        self.stroke.end();
        self.surface.clear();
    }

    /// Apply measured CSS dimensions and device pixel ratio. Returns
    /// `true` when the buffer was reallocated — any in-progress drawing
    /// is discarded along with it.
    pub fn resize(&mut self, logical_width: f64, logical_height: f64, dpr: f64) -> bool {
        let reallocated = self.surface.resize(logical_width, logical_height, dpr);
        if reallocated {
            self.stroke.end();
        }
        reallocated
    }

    // --- Capture flow ---

    /// Request a capture of the current surface, entering the preview on
    /// success. The pending slot is last-write-wins.
    ///
    /// # Errors
    ///
    /// [`CaptureError::EmptySurface`] when nothing was drawn — the flow
    /// stays in [`Stage::Drawing`] and the surface is untouched.
    /// [`CaptureError::Encode`] when PNG encoding fails.
    pub fn request_capture(&mut self, timestamp_ms: i64) -> Result<&Capture, CaptureError> {
        if !self.surface.has_ink() {
            return Err(CaptureError::EmptySurface);
        }
        self.stroke.end();
        let capture = export::encode_capture(&self.surface, timestamp_ms)?;
        Ok(self.flow.begin_preview(capture))
    }

    /// Redraw: discard the pending capture and return to drawing. The
    /// surface keeps its content.
    pub fn redraw(&mut self) {
        let _ = self.flow.discard();
    }

    /// Confirm the pending capture, handing it to the caller for
    /// delivery. `None` while nothing is pending.
    pub fn confirm(&mut self) -> Option<Capture> {
        self.flow.confirm()
    }
}
