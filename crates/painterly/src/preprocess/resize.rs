//! Working-resolution computation and nearest-neighbor downscale.
//!
//! The pipeline caps the longest image side (768 by default) before any
//! other stage runs. The cap bounds worst-case stroke count and render
//! time; it never upscales. Sampling is nearest-neighbor on purpose:
//! posterization needs hard pixel edges, and an interpolating filter would
//! smear the color blocks the stroke sampler reads from.

use crate::color::Rgba;

/// Compute the working resolution for a source image: scaled down (never
/// up) so that `max(width, height) <= max_side`, aspect ratio preserved,
/// dimensions rounded to nearest. Degenerate aspect ratios clamp to at
/// least one pixel per side; zero-sized input stays zero-sized.
pub fn working_dimensions(width: usize, height: usize, max_side: usize) -> (usize, usize) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let cap = max_side as f64;
    let ratio = (cap / width as f64).min(cap / height as f64).min(1.0);

    let scaled_w = ((width as f64 * ratio).round() as usize).max(1);
    let scaled_h = ((height as f64 * ratio).round() as usize).max(1);
    (scaled_w, scaled_h)
}

/// Downscale with nearest-neighbor sampling at destination pixel centers.
///
/// The source pixel for destination coordinate `d` along an axis is
/// `floor((d + 0.5) * src / dst)`, computed in integer arithmetic. With
/// `dst <= src` the mapping never leaves the source grid.
pub fn resize_nearest(
    pixels: &[Rgba],
    src_w: usize,
    src_h: usize,
    dst_w: usize,
    dst_h: usize,
) -> Vec<Rgba> {
    debug_assert_eq!(pixels.len(), src_w * src_h, "pixel slice/dimension mismatch");

    if dst_w == 0 || dst_h == 0 {
        return Vec::new();
    }
    if dst_w == src_w && dst_h == src_h {
        return pixels.to_vec();
    }

    let mut out = Vec::with_capacity(dst_w * dst_h);
    for y in 0..dst_h {
        // (y + 0.5) * src_h / dst_h, floored, without leaving integers.
        let sy = ((2 * y + 1) * src_h / (2 * dst_h)).min(src_h - 1);
        let row = &pixels[sy * src_w..(sy + 1) * src_w];
        for x in 0..dst_w {
            let sx = ((2 * x + 1) * src_w / (2 * dst_w)).min(src_w - 1);
            out.push(row[sx]);
        }
    }
    out
}
