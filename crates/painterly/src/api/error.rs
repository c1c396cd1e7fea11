//! Error type for the public API.

use std::fmt;

/// Error type for strict parameter validation.
///
/// The render path itself is total: out-of-range parameters degrade to
/// zero strokes rather than failing. This error exists for hardened
/// boundaries that opt into rejecting caller mistakes loudly via
/// [`StrokeParams::validated`](crate::StrokeParams::validated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintError {
    /// A parameter was non-positive or not finite.
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintError::InvalidParameter { name, value } => {
                write!(
                    f,
                    "invalid parameter {}: {} (expected a finite positive value)",
                    name, value
                )
            }
        }
    }
}

impl std::error::Error for PaintError {}
