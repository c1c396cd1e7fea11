//! Channel posterization.
//!
//! Snapping every color channel to a handful of evenly spaced levels turns
//! the resized image into large flat color blocks, which is what makes the
//! stroke sampler's point lookups produce coherent paint regions instead
//! of per-pixel noise.

use crate::color::Rgba;

/// Number of quantization levels per channel used by default. Six levels
/// give the step value 51 and 6^3 = 216 achievable colors.
pub const DEFAULT_LEVELS: u8 = 6;

/// Quantize every color channel of every pixel to `levels` evenly spaced
/// values in `[0, 255]`, in place. Alpha is untouched.
///
/// Each channel value becomes `round(v / step) * step` with
/// `step = 255 / (levels - 1)`. Deterministic, idempotent. Fewer than two
/// levels would make the step degenerate, so `levels` is clamped to 2.
pub fn posterize(pixels: &mut [Rgba], levels: u8) {
    let levels = levels.max(2);
    let step = 255.0 / (levels - 1) as f32;

    for px in pixels.iter_mut() {
        px.r = quantize(px.r, step);
        px.g = quantize(px.g, step);
        px.b = quantize(px.b, step);
    }
}

#[inline]
fn quantize(v: u8, step: f32) -> u8 {
    ((v as f32 / step).round() * step).round().clamp(0.0, 255.0) as u8
}
