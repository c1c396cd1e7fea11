//! Plain-data stroke descriptions.
//!
//! A [`StrokeDescriptor`] is everything the rasterizer needs to paint
//! one stroke, with no reference back to the style or RNG that produced
//! it. Generation and rendering communicate only through these values,
//! which keeps both sides independently testable.

use crate::color::Rgb;

/// The footprint shape of a single dab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DabShape {
    /// Axis extents are half-width and half-height of a rotated rectangle.
    Rect,
    /// Axis extents are the radii of a rotated ellipse.
    Ellipse,
}

/// One paint deposit within a stroke.
///
/// Positions and extents are in stroke-local coordinates: `along` runs
/// in the stroke's rotation direction, `across` perpendicular to it,
/// both centered on the stroke anchor. The rasterizer rotates these
/// into image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dab {
    /// Center offset along the stroke direction, in pixels.
    pub along: f32,
    /// Center offset across the stroke direction, in pixels.
    pub across: f32,
    /// Half extent along the stroke direction (rect) or rx (ellipse).
    pub half_length: f32,
    /// Half extent across the stroke direction (rect) or ry (ellipse).
    pub half_thickness: f32,
    /// Rect or ellipse footprint.
    pub shape: DabShape,
    /// Paint color after per-dab brightness jitter.
    pub color: Rgb,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

/// A complete stroke, ready to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDescriptor {
    /// Anchor x in working-image coordinates.
    pub x: f32,
    /// Anchor y in working-image coordinates.
    pub y: f32,
    /// Stroke direction in radians.
    pub rotation: f32,
    /// Overall stroke length in pixels, before per-dab jitter.
    pub length: f32,
    /// Overall stroke thickness in pixels, before per-dab jitter.
    pub thickness: f32,
    /// Color sampled from the posterized image at the anchor, before
    /// any brightness jitter.
    pub base_color: Rgb,
    /// The deposits making up the stroke, in paint order.
    pub dabs: Vec<Dab>,
}
