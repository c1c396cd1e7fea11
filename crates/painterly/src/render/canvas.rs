//! The mutable paint surface.

use crate::color::{Rgb, Rgba};
use crate::output::Painting;

/// An RGBA8 surface strokes are composited onto.
///
/// The surface is always opaque once filled: painting blends RGB with
/// source-over arithmetic and pins alpha at 255, so the exported image
/// never carries translucency.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

/// Blend one channel of `src` over `dst` at the given alpha (0-255).
///
/// Uses the integer approximation of `/ 255`: exact at alpha 0 and 255,
/// within one step of the real quotient elsewhere.
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 1 + (result >> 8)) >> 8) as u8
}

impl Canvas {
    /// Allocate a zeroed surface. Callers fill it before painting.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set every pixel to an opaque color.
    pub fn fill(&mut self, color: Rgb) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = 255;
        }
    }

    /// Source-over blend one pixel. Out-of-bounds coordinates are
    /// ignored, alpha is `0..=255`, and the pixel stays opaque.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: u16) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        self.pixels[idx] = blend_channel(color.r, self.pixels[idx], alpha);
        self.pixels[idx + 1] = blend_channel(color.g, self.pixels[idx + 1], alpha);
        self.pixels[idx + 2] = blend_channel(color.b, self.pixels[idx + 2], alpha);
        self.pixels[idx + 3] = 255;
    }

    /// Read one pixel back. Intended for tests and tooling.
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let idx = (y * self.width + x) * 4;
        Rgba::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// The raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Finish painting and hand the pixels over as an immutable result.
    pub fn into_painting(self) -> Painting {
        Painting::new(self.pixels, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.as_bytes(), &[0u8; 24][..]);
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.height(), 2);
    }

    #[test]
    fn test_fill_sets_every_pixel_opaque() {
        let mut canvas = Canvas::new(4, 3);
        canvas.fill(Rgb::new(10, 20, 30));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Rgba::new(10, 20, 30, 255));
            }
        }
    }

    #[test]
    fn test_blend_full_alpha_replaces() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Rgb::new(40, 40, 40));
        canvas.blend_pixel(1, 0, Rgb::new(200, 100, 50), 255);
        assert_eq!(canvas.pixel(1, 0), Rgba::new(200, 100, 50, 255));
        // Neighbors untouched.
        assert_eq!(canvas.pixel(0, 0), Rgba::new(40, 40, 40, 255));
    }

    #[test]
    fn test_blend_zero_alpha_is_identity() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Rgb::new(40, 41, 42));
        canvas.blend_pixel(0, 0, Rgb::new(255, 255, 255), 0);
        assert_eq!(canvas.pixel(0, 0), Rgba::new(40, 41, 42, 255));
    }

    #[test]
    fn test_blend_half_alpha_mixes() {
        let mut canvas = Canvas::new(1, 1);
        canvas.fill(Rgb::BLACK);
        canvas.blend_pixel(0, 0, Rgb::new(255, 255, 255), 128);
        let px = canvas.pixel(0, 0);
        assert_eq!(px.r, 128);
        assert_eq!(px.a, 255);
    }

    #[test]
    fn test_blend_out_of_bounds_is_noop() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Rgb::BLACK);
        canvas.blend_pixel(-1, 0, Rgb::new(255, 0, 0), 255);
        canvas.blend_pixel(0, -5, Rgb::new(255, 0, 0), 255);
        canvas.blend_pixel(2, 0, Rgb::new(255, 0, 0), 255);
        canvas.blend_pixel(0, 2, Rgb::new(255, 0, 0), 255);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(canvas.pixel(x, y), Rgba::new(0, 0, 0, 255));
            }
        }
    }

    #[test]
    fn test_blend_channel_exact_at_extremes() {
        for v in [0u8, 1, 77, 128, 254, 255] {
            assert_eq!(blend_channel(v, 91, 255), v, "alpha 255 replaces");
            assert_eq!(blend_channel(91, v, 0), v, "alpha 0 keeps destination");
        }
    }

    #[test]
    fn test_surface_stays_opaque_after_translucent_paint() {
        let mut canvas = Canvas::new(1, 1);
        canvas.fill(Rgb::BLACK);
        canvas.blend_pixel(0, 0, Rgb::new(9, 9, 9), 13);
        assert_eq!(canvas.pixel(0, 0).a, 255);
    }

    #[test]
    fn test_into_painting_carries_pixels() {
        let mut canvas = Canvas::new(2, 1);
        canvas.fill(Rgb::new(5, 6, 7));
        let painting = canvas.into_painting();
        assert_eq!(painting.width(), 2);
        assert_eq!(painting.height(), 1);
        assert_eq!(painting.as_rgba_bytes(), &[5, 6, 7, 255, 5, 6, 7, 255]);
    }
}
