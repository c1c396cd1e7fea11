//! Byte-per-channel pixel types.
//!
//! [`Rgb`] is the color triple strokes carry; [`Rgba`] is the pixel format
//! of source images and rendered surfaces. Both are plain 8-bit values in
//! the source image's own color space -- the pipeline does no gamma or
//! color management (deliberately; the look is defined on raw bytes).

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Opaque black, the canvas clear color.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values as a `[r, g, b]` array.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// An 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a pixel from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// The color channels, dropping alpha.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Rgba {
    /// Promote an opaque color to a pixel with full alpha.
    #[inline]
    fn from(color: Rgb) -> Self {
        Rgba::opaque(color.r, color.g, color.b)
    }
}
