//! Pen settings and the stroke gesture state machine.
//!
//! `StrokeCapturer` is the active gesture being tracked between
//! pointer-down and pointer-up. `begin` records the starting point and
//! enters the drawing phase; `extend` stamps a straight segment from the
//! previous sample to the new one; `end` returns to idle unconditionally.
//! There is no terminal state — the machine cycles for the life of the
//! widget.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use crate::color::Rgb;
use crate::consts::{PEN_WIDTH_DEFAULT, PEN_WIDTH_MAX, PEN_WIDTH_MIN};
use crate::geom::Point;
use crate::raster;
use crate::surface::Surface;

/// Pen configuration applied to stamped segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stroke width in logical pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Rgb,
}

impl Default for Pen {
    fn default() -> Self {
        Self { width: PEN_WIDTH_DEFAULT, color: Rgb::BLACK }
    }
}

impl Pen {
    /// Clamp an arbitrary width into the supported range.
    #[must_use]
    pub fn clamp_width(width: f64) -> f64 {
        if width.is_finite() {
            width.clamp(PEN_WIDTH_MIN, PEN_WIDTH_MAX)
        } else {
            PEN_WIDTH_DEFAULT
        }
    }
}

/// Phase of the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokePhase {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is live; `last` is the previous sample point.
    Drawing {
        /// Logical-space position of the previous pointer sample.
        last: Point,
    },
}

/// Gesture state machine turning pointer samples into stamped segments.
#[derive(Debug, Default)]
pub struct StrokeCapturer {
    phase: StrokePhase,
}

impl StrokeCapturer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stroke is currently live.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, StrokePhase::Drawing { .. })
    }

    /// Enter the drawing phase at `at`. Only the point is recorded; ink
    /// appears once the pointer moves.
    pub fn begin(&mut self, at: Point) {
        self.phase = StrokePhase::Drawing { last: at };
    }

    /// Stamp a segment from the last sample to `to` and advance the last
    /// sample. No-op while idle. Returns `true` when a segment was
    /// stamped.
    pub fn extend(&mut self, surface: &mut Surface, pen: &Pen, to: Point) -> bool {
        let StrokePhase::Drawing { last } = self.phase else {
            return false;
        };
        raster::stamp_segment(surface, last, to, pen.width, pen.color);
        self.phase = StrokePhase::Drawing { last: to };
        true
    }

    /// Leave the drawing phase. Idempotent; harmless while idle.
    pub fn end(&mut self) {
        self.phase = StrokePhase::Idle;
    }
}
