//! Segment rasterization: stamps straight pen segments onto the surface.
//!
//! Each segment is scanned over its padded physical-pixel bounding box.
//! A pixel's coverage comes from its center's distance to the segment:
//! full inside the pen radius, a one-pixel linear ramp at the rim. Round
//! caps and joins fall out of the distance metric. Output is
//! deterministic for identical inputs.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::color::Rgb;
use crate::consts::AA_RAMP_PX;
use crate::geom::{Point, segment_distance};
use crate::surface::Surface;

/// Stamp one straight segment onto `surface`.
///
/// `from`/`to` and `width` are in logical pixels; both are scaled by the
/// surface's device pixel ratio before stamping so strokes keep their
/// on-screen size across DPR changes.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stamp_segment(surface: &mut Surface, from: Point, to: Point, width: f64, color: Rgb) {
    let dpr = surface.dpr();
    let a = Point::new(from.x * dpr, from.y * dpr);
    let b = Point::new(to.x * dpr, to.y * dpr);
    let radius = (width * dpr) / 2.0;
    if radius <= 0.0 {
        return;
    }

    let pad = radius + AA_RAMP_PX;
    let x_min = (a.x.min(b.x) - pad).floor().max(0.0) as u32;
    let y_min = (a.y.min(b.y) - pad).floor().max(0.0) as u32;
    let x_max = ((a.x.max(b.x) + pad).ceil().max(0.0) as u32).min(surface.width());
    let y_max = ((a.y.max(b.y) + pad).ceil().max(0.0) as u32).min(surface.height());
    if x_min >= x_max || y_min >= y_max {
        return;
    }

    for py in y_min..y_max {
        for px in x_min..x_max {
            let center = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
            let dist = segment_distance(center, a, b);
            let coverage = (AA_RAMP_PX.mul_add(0.5, radius) - dist) / AA_RAMP_PX;
            if coverage > 0.0 {
                surface.blend_pixel(px, py, color, coverage.min(1.0) as f32);
            }
        }
    }
}
