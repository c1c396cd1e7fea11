//! Stroke planning: styles, parameters and the generator.
//!
//! A render pass turns the posterized buffer into an ordered sequence
//! of [`StrokeDescriptor`]s. The [`StrokeGenerator`] owns the random
//! source and the loop; the three [`StrokeStyle`] variants carry the
//! tuned constants that give each brush its character. The constants
//! are data on purpose: styles can be customized per render without
//! touching generator code.

mod descriptor;
mod generator;
mod params;
mod style;

pub use descriptor::{Dab, DabShape, StrokeDescriptor};
pub use generator::StrokeGenerator;
pub use params::StrokeParams;
pub use style::{BristleStyle, DabStyle, FlatRectStyle, Span, StrokeStyle};
