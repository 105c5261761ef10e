//! Reactive UI state mirrored out of the engine.
//!
//! DESIGN
//! ======
//! The engine (`ink::pad::PadCore`) is imperative and lives in an
//! `Rc<RefCell<…>>`; this struct is the reactive mirror components read
//! so the view updates without borrowing the engine during render.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use ink::consts::PEN_WIDTH_DEFAULT;
use ink::flow::Stage;

/// Transient state of the save control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveIndicator {
    /// Normal label.
    #[default]
    Idle,
    /// Capture encoding in progress.
    Saving,
    /// Flash shown right after a successful capture.
    Saved,
}

/// UI state for the pad page.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Mirror of the engine's flow stage.
    pub stage: Stage,
    /// Pen width shown by the range control, in logical pixels.
    pub pen_width: f64,
    /// Pen color shown by the color control, canonical `#rrggbb`.
    pub pen_color: String,
    /// Data URL of the pending capture, set while previewing.
    pub preview_url: Option<String>,
    /// Inline blocking notice, shown until auto-dismissed.
    pub notice: Option<String>,
    /// Whether the clear control is flashing its confirmation label.
    pub clear_flashed: bool,
    /// Transient save control state.
    pub save_indicator: SaveIndicator,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            stage: Stage::Drawing,
            pen_width: PEN_WIDTH_DEFAULT,
            pen_color: "#000000".to_owned(),
            preview_url: None,
            notice: None,
            clear_flashed: false,
            save_indicator: SaveIndicator::Idle,
        }
    }
}
