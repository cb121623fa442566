//! Assertion helpers for palette images.

use std::path::Path;

use image::RgbaImage;
use pretty_assertions::assert_eq;

/// Decode a written palette PNG into RGBA8.
pub fn load_palette(path: &Path) -> RgbaImage {
    assert!(path.exists(), "Expected palette at {}", path.display());
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
        .to_rgba8()
}

/// Opaque pixels in row-major order, as RGB triples.
pub fn opaque_colours(img: &RgbaImage) -> Vec<[u8; 3]> {
    img.pixels()
        .filter(|p| p.0[3] == 255)
        .map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect()
}

/// Every pixel is either fully opaque or fully transparent, and all
/// transparent pixels come after the last opaque one.
pub fn assert_palette_shape(img: &RgbaImage) {
    let alphas: Vec<u8> = img.pixels().map(|p| p.0[3]).collect();
    assert!(
        alphas.iter().all(|&a| a == 0 || a == 255),
        "Palette has partially transparent pixels: {alphas:?}"
    );
    let first_clear = alphas.iter().position(|&a| a == 0).unwrap_or(alphas.len());
    assert!(
        alphas[first_clear..].iter().all(|&a| a == 0),
        "Opaque pixel after a transparent one: {alphas:?}"
    );
}

/// Assert dimensions and the exact row-major opaque colours.
pub fn assert_palette(img: &RgbaImage, width: u32, height: u32, colours: &[[u8; 3]]) {
    assert_eq!(
        (img.width(), img.height()),
        (width, height),
        "Unexpected palette dimensions"
    );
    assert_palette_shape(img);
    assert_eq!(opaque_colours(img), colours.to_vec());
}
