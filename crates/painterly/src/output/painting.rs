//! The finished render result.

use crate::color::Rgba;

/// An immutable RGBA8 surface at working resolution.
///
/// Returned by a render pass and owned by the caller; encoding it as a
/// file is left to collaborators (the pixels are already laid out the
/// way PNG encoders expect: row-major RGBA, 8 bits per channel, fully
/// opaque).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Painting {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Painting {
    pub(crate) fn new(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 4, "pixel byte/dimension mismatch");
        Self {
            pixels,
            width,
            height,
        }
    }

    /// The zero-by-zero painting produced for empty input.
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), 0, 0)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the painting holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_rgba_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the painting, keeping only the bytes.
    #[inline]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// Bounds-checked pixel read.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Rgba::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ))
    }
}
