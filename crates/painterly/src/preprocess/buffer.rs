//! The posterized lookup buffer and its point sampler.

use crate::color::{Rgb, Rgba};

/// A posterized copy of the resized source image, consumed as a color
/// lookup table during stroke generation and discarded afterwards.
///
/// Sampling clamps coordinates into the pixel grid, so callers may pass
/// any point, including jittered positions outside the image, and always
/// get a real pixel's color back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterizedBuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl PosterizedBuffer {
    /// Wrap posterized pixels with their dimensions.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgba>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height, "pixel slice/dimension mismatch");
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The underlying pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Sample the color under a point: truncate the coordinates toward
    /// zero, clamp them into `[0, width-1] x [0, height-1]`, and return
    /// that pixel's RGB triple (alpha ignored).
    ///
    /// Total for every finite and non-finite input. The buffer must be
    /// non-empty (the pipeline guards empty images before building one).
    #[inline]
    pub fn sample_color(&self, x: f32, y: f32) -> Rgb {
        debug_assert!(!self.pixels.is_empty(), "sampling an empty buffer");
        let sx = (x as i64).clamp(0, self.width as i64 - 1) as usize;
        let sy = (y as i64).clamp(0, self.height as i64 - 1) as usize;
        self.pixels[sy * self.width + sx].rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a 4x3 buffer whose pixel at (x, y) encodes its own
    /// coordinates as (x, y, 0).
    fn coordinate_buffer() -> PosterizedBuffer {
        let pixels = (0..3)
            .flat_map(|y| (0..4).map(move |x| Rgba::opaque(x as u8, y as u8, 0)))
            .collect();
        PosterizedBuffer::new(pixels, 4, 3)
    }

    #[test]
    fn test_sample_truncates_toward_zero() {
        let buf = coordinate_buffer();
        assert_eq!(buf.sample_color(2.9, 1.9), Rgb::new(2, 1, 0));
        assert_eq!(buf.sample_color(0.0, 0.0), Rgb::new(0, 0, 0));
        // -0.5 truncates to 0, not -1.
        assert_eq!(buf.sample_color(-0.5, -0.5), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_sample_clamps_out_of_range() {
        let buf = coordinate_buffer();
        assert_eq!(buf.sample_color(-100.0, -7.0), Rgb::new(0, 0, 0));
        assert_eq!(buf.sample_color(100.0, 7.0), Rgb::new(3, 2, 0));
        assert_eq!(buf.sample_color(4.0, 0.0), Rgb::new(3, 0, 0));
    }

    #[test]
    fn test_sample_handles_non_finite_coordinates() {
        let buf = coordinate_buffer();
        assert_eq!(buf.sample_color(f32::NEG_INFINITY, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(buf.sample_color(f32::INFINITY, f32::INFINITY), Rgb::new(3, 2, 0));
        // NaN casts to zero.
        assert_eq!(buf.sample_color(f32::NAN, f32::NAN), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_accessors() {
        let buf = coordinate_buffer();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert!(!buf.is_empty());
        assert_eq!(buf.pixels().len(), 12);
    }
}
