//! Rendering: copies the engine's pixel buffer to the canvas element.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of
//! the surface and produces pixels — it does not mutate any widget
//! state. All fallible `Canvas2D` calls propagate errors via
//! `Result<(), JsValue>`; callers log and continue degraded.

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use ink::surface::Surface;

/// Size the canvas backing store to the surface's physical pixels and
/// pin its CSS box to the logical size.
///
/// # Errors
///
/// Returns `Err` if the style properties cannot be set.
pub fn apply_canvas_size(canvas: &HtmlCanvasElement, surface: &Surface) -> Result<(), JsValue> {
    canvas.set_width(surface.width());
    canvas.set_height(surface.height());
    let style = canvas.style();
    style.set_property("width", &format!("{}px", surface.logical_width()))?;
    style.set_property("height", &format!("{}px", surface.logical_height()))?;
    Ok(())
}

/// Copy the surface buffer onto the canvas.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or rejects the image
/// data.
pub fn blit(canvas: &HtmlCanvasElement, surface: &Surface) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    let image = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(surface.data()),
        surface.width(),
        surface.height(),
    )?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected 2d context type"))
}
