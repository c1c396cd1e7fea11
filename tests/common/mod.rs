//! Common test infrastructure for impasto integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::path::Path;

use painterly::Rgba;

/// A deterministic multi-color gradient, useful when a test needs an
/// image with actual structure in it.
pub fn gradient_pixels(width: usize, height: usize) -> Vec<Rgba> {
    (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            Rgba::opaque(
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) % 256) as u8,
            )
        })
        .collect()
}

/// A single-color image.
pub fn solid_pixels(color: Rgba, width: usize, height: usize) -> Vec<Rgba> {
    vec![color; width * height]
}

/// Write pixels to disk as a PNG, for feeding the file-based pipeline.
pub fn write_png(path: &Path, pixels: &[Rgba], width: usize, height: usize) {
    let raw: Vec<u8> = pixels
        .iter()
        .flat_map(|px| [px.r, px.g, px.b, px.a])
        .collect();
    let img = image::RgbaImage::from_raw(width as u32, height as u32, raw)
        .expect("pixel buffer should match dimensions");
    img.save(path).expect("failed to write test PNG");
}

/// Assert a byte buffer is a PNG stream.
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.len() > 8,
        "Expected PNG data, got only {} bytes",
        bytes.len()
    );
    assert_eq!(
        &bytes[..8],
        b"\x89PNG\r\n\x1a\n",
        "Expected PNG signature, got {:?}",
        &bytes[..8]
    );
}

/// Decode PNG bytes back to raw RGBA for pixel-level assertions.
pub fn decode_png(bytes: &[u8]) -> (Vec<u8>, u32, u32) {
    let img = image::load_from_memory(bytes)
        .expect("failed to decode PNG output")
        .to_rgba8();
    let (width, height) = img.dimensions();
    (img.into_raw(), width, height)
}
