//! Viewport synchronization between the canvas element and the engine.

use web_sys::HtmlCanvasElement;

use ink::pad::PadCore;

/// Read the canvas element's CSS dimensions and device pixel ratio, then
/// push them into the pad.
///
/// Uses CSS pixel dimensions (`client_width` / `client_height`); the
/// engine multiplies by DPR internally when sizing its buffer. Returns
/// `true` when the buffer was reallocated — the caller must re-apply the
/// canvas backing-store size and re-blit.
pub fn sync_surface(pad: &mut PadCore, canvas: &HtmlCanvasElement) -> bool {
    let Some(window) = web_sys::window() else {
        log::warn!("window unavailable; viewport not synced");
        return false;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    pad.resize(width, height, dpr)
}
