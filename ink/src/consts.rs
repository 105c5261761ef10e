//! Shared numeric constants for the ink crate.

// ── Pen ─────────────────────────────────────────────────────────

/// Narrowest selectable pen width in logical pixels.
pub const PEN_WIDTH_MIN: f64 = 1.0;

/// Widest selectable pen width in logical pixels.
pub const PEN_WIDTH_MAX: f64 = 20.0;

/// Pen width applied before the user touches the selector.
pub const PEN_WIDTH_DEFAULT: f64 = 3.0;

// ── Surface ─────────────────────────────────────────────────────

/// Channels per pixel in the surface buffer (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// Anti-alias ramp width at a stamped segment's rim, in physical pixels.
pub const AA_RAMP_PX: f64 = 1.0;
