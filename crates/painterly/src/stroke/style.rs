//! Stroke style definitions.
//!
//! This module defines the three built-in brush styles as plain data.
//! Each style is a struct of [`Span`] ranges and counts that the stroke
//! generator samples from; the generator itself contains no per-style
//! magic numbers.

use rand::Rng;

/// A uniform sampling range `[lo, hi)`.
///
/// Spans express "a base value plus random spread": sampling draws
/// `lo + u * (hi - lo)` for a uniform `u` in `[0, 1)`, so `lo` is always
/// reachable and `hi` never quite is. A span with `lo == hi` is a
/// constant.
///
/// Most spans here are multipliers applied to another quantity (the base
/// stroke size, the stroke length), not absolute pixel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Inclusive lower bound.
    pub lo: f32,
    /// Exclusive upper bound.
    pub hi: f32,
}

impl Span {
    /// Create a span covering `[lo, hi)`.
    #[inline]
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Draw a uniform sample from the span.
    #[inline]
    pub fn sample<R: Rng>(self, rng: &mut R) -> f32 {
        self.lo + rng.gen::<f32>() * (self.hi - self.lo)
    }
}

/// Constants for the bristle brush.
///
/// A bristle stroke is a fan of thin, overlapping rectangles spread
/// across the stroke direction, each with its own brightness and opacity
/// wobble. Neighboring strokes blend into streaky, oil-like texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BristleStyle {
    /// Strokes per source pixel at density 1.0.
    ///
    /// Default: `0.16`
    pub coverage: f32,

    /// Stroke size as a multiple of the base size.
    ///
    /// Default: `0.8..1.5`
    pub size: Span,

    /// Stroke length as a multiple of the stroke size.
    ///
    /// Default: `3.0..5.5`
    pub length: Span,

    /// Inclusive range of bristles per stroke.
    ///
    /// Default: `(5, 8)`
    pub bristles: (u32, u32),

    /// Per-bristle lightness offset added in HSL space.
    ///
    /// Default: `-0.125..0.125`
    pub brightness: Span,

    /// Per-bristle opacity.
    ///
    /// Default: `0.6..0.95`
    pub alpha: Span,

    /// Per-bristle length as a multiple of the stroke length.
    ///
    /// Default: `0.85..1.15`
    pub length_jitter: Span,

    /// Per-bristle thickness as a multiple of the stroke size.
    ///
    /// Default: `0.35..0.6`
    pub thickness: Span,

    /// Per-bristle slide along the stroke direction, as a multiple of
    /// the stroke length.
    ///
    /// Default: `-0.075..0.075`
    pub along_jitter: Span,
}

impl Default for BristleStyle {
    fn default() -> Self {
        Self {
            coverage: 0.16,
            size: Span::new(0.8, 1.5),
            length: Span::new(3.0, 5.5),
            bristles: (5, 8),
            brightness: Span::new(-0.125, 0.125),
            alpha: Span::new(0.6, 0.95),
            length_jitter: Span::new(0.85, 1.15),
            thickness: Span::new(0.35, 0.6),
            along_jitter: Span::new(-0.075, 0.075),
        }
    }
}

/// Constants for the dab brush.
///
/// A dab stroke is a chain of small rotated ellipses laid end to end
/// along the stroke direction, like touching the canvas repeatedly with
/// the tip of a round brush. Produces a stippled, impressionist surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DabStyle {
    /// Strokes per source pixel at density 1.0.
    ///
    /// Default: `0.12`
    pub coverage: f32,

    /// Stroke size as a multiple of the base size.
    ///
    /// Default: `0.9..1.7`
    pub size: Span,

    /// Stroke length as a multiple of the stroke size.
    ///
    /// Default: `2.6..4.4`
    pub length: Span,

    /// Stroke thickness as a multiple of the stroke size.
    ///
    /// Default: `0.7..1.2`
    pub thickness: Span,

    /// Inclusive range of dabs per stroke.
    ///
    /// Default: `(6, 10)`
    pub dabs: (u32, u32),

    /// Per-dab slide along the stroke direction, as a multiple of the
    /// stroke length.
    ///
    /// Default: `-0.05..0.05`
    pub along_jitter: Span,

    /// Per-dab offset across the stroke direction, as a multiple of the
    /// stroke thickness.
    ///
    /// Default: `-0.2..0.2`
    pub across_jitter: Span,

    /// Per-dab lightness offset added in HSL space.
    ///
    /// Default: `-0.125..0.125`
    pub brightness: Span,

    /// Per-dab ellipse radius along the stroke, as a multiple of half
    /// the stroke thickness.
    ///
    /// Default: `0.7..1.1`
    pub rx: Span,

    /// Per-dab ellipse radius across the stroke, as a multiple of that
    /// dab's rx.
    ///
    /// Default: `0.5..1.0`
    pub ry: Span,

    /// Per-dab opacity.
    ///
    /// Default: `0.35..0.7`
    pub alpha: Span,
}

impl Default for DabStyle {
    fn default() -> Self {
        Self {
            coverage: 0.12,
            size: Span::new(0.9, 1.7),
            length: Span::new(2.6, 4.4),
            thickness: Span::new(0.7, 1.2),
            dabs: (6, 10),
            along_jitter: Span::new(-0.05, 0.05),
            across_jitter: Span::new(-0.2, 0.2),
            brightness: Span::new(-0.125, 0.125),
            rx: Span::new(0.7, 1.1),
            ry: Span::new(0.5, 1.0),
            alpha: Span::new(0.35, 0.7),
        }
    }
}

/// Constants for the flat-rect brush.
///
/// A flat-rect stroke is a single rotated rectangle at high opacity,
/// the whole stroke painted in one piece. Dense coverage of these
/// produces a palette-knife, collage-like surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRectStyle {
    /// Strokes per source pixel at density 1.0.
    ///
    /// Default: `0.25`
    pub coverage: f32,

    /// Stroke size as a multiple of the base size.
    ///
    /// Default: `0.6..1.4`
    pub size: Span,

    /// Stroke length as a multiple of the stroke size.
    ///
    /// Default: `1.6..3.0`
    pub length: Span,

    /// Stroke opacity.
    ///
    /// Default: `0.85..1.0`
    pub alpha: Span,
}

impl Default for FlatRectStyle {
    fn default() -> Self {
        Self {
            coverage: 0.25,
            size: Span::new(0.6, 1.4),
            length: Span::new(1.6, 3.0),
            alpha: Span::new(0.85, 1.0),
        }
    }
}

/// A brush style together with its sampling constants.
///
/// Carrying the constants inside the variant means a customized style
/// travels as one value: build a variant from a modified style struct,
/// or use the constructors for the stock look.
///
/// # Example
///
/// ```
/// use painterly::{BristleStyle, Span, StrokeStyle};
///
/// // Stock styles
/// let stock = StrokeStyle::bristle();
/// assert_eq!(stock.name(), "bristle");
///
/// // Customized: longer bristle strokes, everything else stock
/// let custom = StrokeStyle::Bristle(BristleStyle {
///     length: Span::new(5.0, 9.0),
///     ..Default::default()
/// });
/// assert_eq!(custom.name(), "bristle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    /// Fan of thin overlapping rectangles. The painterly default.
    Bristle(BristleStyle),
    /// Chain of small rotated ellipses, stippled look.
    Dab(DabStyle),
    /// Single high-opacity rotated rectangle, knife-like look.
    FlatRect(FlatRectStyle),
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::bristle()
    }
}

impl StrokeStyle {
    /// The bristle brush with stock constants.
    #[inline]
    pub fn bristle() -> Self {
        Self::Bristle(BristleStyle::default())
    }

    /// The dab brush with stock constants.
    #[inline]
    pub fn dab() -> Self {
        Self::Dab(DabStyle::default())
    }

    /// The flat-rect brush with stock constants.
    #[inline]
    pub fn flat_rect() -> Self {
        Self::FlatRect(FlatRectStyle::default())
    }

    /// Stable lowercase style name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bristle(_) => "bristle",
            Self::Dab(_) => "dab",
            Self::FlatRect(_) => "flat-rect",
        }
    }

    /// Strokes per source pixel at density 1.0.
    pub fn coverage(&self) -> f32 {
        match self {
            Self::Bristle(style) => style.coverage,
            Self::Dab(style) => style.coverage,
            Self::FlatRect(style) => style.coverage,
        }
    }

    /// Number of strokes to place on a `width` x `height` image.
    ///
    /// Computed as `width * height * coverage * density` in f64 and
    /// truncated. Non-finite or non-positive products yield zero, so a
    /// zero or NaN density paints nothing instead of panicking.
    pub fn stroke_count(&self, width: usize, height: usize, density: f32) -> usize {
        let count = width as f64 * height as f64 * self.coverage() as f64 * density as f64;
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }
}
