//! User-tunable stroke parameters.
//!
//! This module provides the [`StrokeParams`] struct for the two knobs
//! exposed to callers: stroke density and base stroke size. Everything
//! else about a stroke's look lives in the per-style constants.

use crate::api::PaintError;

/// Caller-facing stroke tuning.
///
/// `StrokeParams` scales how many strokes are placed and how large each
/// one is. Both values multiply style constants, so `density: 1.0` and
/// `base_size: 4.0` mean "the style's intended look".
///
/// # Example
///
/// ```
/// use painterly::StrokeParams;
///
/// // Use defaults (the style's intended look)
/// let params = StrokeParams::new();
///
/// // Or customize with builder pattern
/// let params = StrokeParams::new().density(0.5).base_size(7.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeParams {
    /// Multiplier on the style's stroke count.
    ///
    /// The number of strokes is `width * height * coverage * density`,
    /// truncated. Values at or below zero (or non-finite) yield zero
    /// strokes, leaving the canvas black.
    ///
    /// Default: `1.0`
    pub density: f32,

    /// Base stroke size in pixels.
    ///
    /// Each stroke scales this by a per-style span, so the rendered
    /// footprint varies around it.
    ///
    /// Default: `4.0`
    pub base_size: f32,
}

impl Default for StrokeParams {
    fn default() -> Self {
        Self {
            density: 1.0,
            base_size: 4.0,
        }
    }
}

impl StrokeParams {
    /// Create new stroke parameters with default values.
    ///
    /// Equivalent to `StrokeParams::default()` but more discoverable.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke density multiplier.
    #[inline]
    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Set the base stroke size in pixels.
    #[inline]
    pub fn base_size(mut self, base_size: f32) -> Self {
        self.base_size = base_size;
        self
    }

    /// Check that both parameters are finite and positive.
    ///
    /// The rendering core itself tolerates any values (bad ones just
    /// produce zero strokes), so this check is for boundaries that want
    /// to reject caller mistakes loudly instead of painting black.
    pub fn validated(self) -> Result<Self, PaintError> {
        // `!(x > 0.0)` also catches NaN, which fails every comparison.
        if !self.density.is_finite() || !(self.density > 0.0) {
            return Err(PaintError::InvalidParameter {
                name: "density",
                value: self.density,
            });
        }
        if !self.base_size.is_finite() || !(self.base_size > 0.0) {
            return Err(PaintError::InvalidParameter {
                name: "base_size",
                value: self.base_size,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let params = StrokeParams::default();
        assert!(
            (params.density - 1.0).abs() < f32::EPSILON,
            "density should default to 1.0"
        );
        assert!(
            (params.base_size - 4.0).abs() < f32::EPSILON,
            "base_size should default to 4.0"
        );
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(StrokeParams::new(), StrokeParams::default());
    }

    #[test]
    fn test_builder_density() {
        let params = StrokeParams::new().density(0.25);
        assert!((params.density - 0.25).abs() < f32::EPSILON);
        // Other values unchanged
        assert!((params.base_size - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder_base_size() {
        let params = StrokeParams::new().base_size(9.0);
        assert!((params.base_size - 9.0).abs() < f32::EPSILON);
        // Other values unchanged
        assert!((params.density - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builder_chaining() {
        let params = StrokeParams::new().density(2.0).base_size(1.5);
        assert!((params.density - 2.0).abs() < f32::EPSILON);
        assert!((params.base_size - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validated_accepts_defaults() {
        assert!(StrokeParams::new().validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_zero_density() {
        let err = StrokeParams::new().density(0.0).validated().unwrap_err();
        match err {
            PaintError::InvalidParameter { name, .. } => assert_eq!(name, "density"),
        }
    }

    #[test]
    fn test_validated_rejects_negative_base_size() {
        let err = StrokeParams::new().base_size(-3.0).validated().unwrap_err();
        match err {
            PaintError::InvalidParameter { name, .. } => assert_eq!(name, "base_size"),
        }
    }

    #[test]
    fn test_validated_rejects_non_finite() {
        assert!(StrokeParams::new().density(f32::NAN).validated().is_err());
        assert!(StrokeParams::new()
            .density(f32::INFINITY)
            .validated()
            .is_err());
        assert!(StrokeParams::new().base_size(f32::NAN).validated().is_err());
    }
}
