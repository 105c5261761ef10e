use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::color::Rgb;
use crate::geom::Point;
use crate::raster::stamp_segment;
use crate::surface::Surface;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// =============================================================
// flatten_onto_white
// =============================================================

#[test]
fn transparent_pixels_become_opaque_white() {
    let flat = flatten_onto_white(&[0, 0, 0, 0]);
    assert_eq!(flat, vec![255, 255, 255, 255]);
}

#[test]
fn opaque_pixels_pass_through() {
    let flat = flatten_onto_white(&[100, 150, 200, 255]);
    assert_eq!(flat, vec![100, 150, 200, 255]);
}

#[test]
fn semi_transparent_pixels_composite_over_white() {
    let flat = flatten_onto_white(&[0, 0, 0, 128]);
    assert_eq!(flat, vec![127, 127, 127, 255]);
}

#[test]
fn every_flattened_pixel_is_fully_opaque() {
    let input: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
    let flat = flatten_onto_white(&input);
    for px in flat.chunks_exact(4) {
        assert_eq!(px[3], 255);
    }
}

// =============================================================
// encode_capture
// =============================================================

#[test]
fn capture_carries_png_signature_and_dimensions() {
    let s = Surface::new(40.0, 20.0, 1.0);
    let capture = encode_capture(&s, 1_700_000_000_000).unwrap();

    assert_eq!(&capture.png()[..8], &PNG_SIGNATURE);
    // IHDR width/height live at fixed offsets after the signature.
    let width = u32::from_be_bytes(capture.png()[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(capture.png()[20..24].try_into().unwrap());
    assert_eq!(width, 40);
    assert_eq!(height, 20);
    assert_eq!(capture.width(), 40);
    assert_eq!(capture.height(), 20);
    assert_eq!(capture.timestamp_ms(), 1_700_000_000_000);
}

#[test]
fn decoded_capture_has_no_transparent_pixels() {
    let mut s = Surface::new(60.0, 30.0, 1.0);
    stamp_segment(&mut s, Point::new(10.0, 10.0), Point::new(50.0, 10.0), 5.0, Rgb::BLACK);
    let capture = encode_capture(&s, 1).unwrap();

    let decoded = image::load_from_memory(capture.png()).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 60);
    assert_eq!(decoded.height(), 30);
    assert!(decoded.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn decoded_capture_reproduces_the_band_scenario() {
    let mut s = Surface::new(100.0, 30.0, 1.0);
    stamp_segment(&mut s, Point::new(10.0, 10.0), Point::new(50.0, 10.0), 5.0, Rgb::BLACK);
    let capture = encode_capture(&s, 1).unwrap();

    let decoded = image::load_from_memory(capture.png()).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(30, 10).0, [0, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(30, 9).0, [0, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(30, 3).0, [255, 255, 255, 255]);
    assert_eq!(decoded.get_pixel(70, 10).0, [255, 255, 255, 255]);
}

// =============================================================
// Data URL and filename
// =============================================================

#[test]
fn data_url_is_base64_png() {
    let s = Surface::new(8.0, 8.0, 1.0);
    let capture = encode_capture(&s, 7).unwrap();

    let url = capture.to_data_url();
    let encoded = url.strip_prefix("data:image/png;base64,").unwrap();
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(decoded, capture.png());
}

#[test]
fn filename_embeds_the_timestamp() {
    let s = Surface::new(8.0, 8.0, 1.0);
    let capture = encode_capture(&s, 1_699_999_999_999).unwrap();
    assert_eq!(capture.filename(), "signature_1699999999999.png");
}
