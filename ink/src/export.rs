//! Export encoding: flatten the surface onto opaque white and produce
//! PNG bytes plus the data-URL form handed to the host bridge.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use base64::{Engine as _, engine::general_purpose};
use image::ImageEncoder;
use image::codecs::png::PngEncoder;

use crate::consts::BYTES_PER_PIXEL;
use crate::surface::Surface;

/// Error produced while encoding a capture.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The PNG encoder rejected the buffer.
    #[error("failed to encode surface as PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// A finalized export snapshot awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    png: Vec<u8>,
    width: u32,
    height: u32,
    timestamp_ms: i64,
}

impl Capture {
    /// Encoded PNG bytes.
    #[must_use]
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Physical pixel width of the encoded image.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical pixel height of the encoded image.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Epoch milliseconds at which export was requested.
    #[must_use]
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// `data:image/png;base64,…` form used on the wire and in the
    /// preview panel.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(&self.png))
    }

    /// Download filename for the local-file path.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("signature_{}.png", self.timestamp_ms)
    }
}

/// Flatten RGBA pixels onto an opaque white background.
///
/// Every output pixel carries alpha 255 regardless of input alpha, so
/// the exported image never contains a transparent or semi-transparent
/// pixel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn flatten_onto_white(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(BYTES_PER_PIXEL) {
        let alpha = f32::from(px[3]) / 255.0;
        for channel in &px[..3] {
            let composited = f32::from(*channel).mul_add(alpha, 255.0 * (1.0 - alpha));
            out.push(composited.round() as u8);
        }
        out.push(0xFF);
    }
    out
}

/// Encode the surface into a capture stamped with `timestamp_ms`.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if PNG encoding fails.
pub fn encode_capture(surface: &Surface, timestamp_ms: i64) -> Result<Capture, ExportError> {
    let flat = flatten_onto_white(surface.data());
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        &flat,
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(Capture {
        png,
        width: surface.width(),
        height: surface.height(),
        timestamp_ms,
    })
}
