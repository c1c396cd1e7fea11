//! Rasterization of stroke sequences onto an RGBA surface.
//!
//! The renderer consumes [`StrokeDescriptor`]s in order: clear to
//! opaque black, then composite every dab with source-over blending.
//! All geometry is resolved to explicit world-space coordinates before
//! rasterization; there is no transform stack and no state shared
//! between primitives.
//!
//! [`StrokeDescriptor`]: crate::stroke::StrokeDescriptor

mod canvas;
mod raster;
mod renderer;

pub use canvas::Canvas;
pub use raster::{fill_ellipse, fill_quad};
pub use renderer::render_strokes;
