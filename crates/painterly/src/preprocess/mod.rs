//! Image preparation ahead of stroke generation.
//!
//! Source images pass through two steps before any stroke is placed:
//!
//! 1. **Resize** -- scale down so the longest side fits a cap (768 px by
//!    default), preserving aspect ratio. Nearest-neighbor on purpose:
//!    hard pixel edges survive, and the stroke pass repaints everything
//!    anyway, so smoother filters would only buy blur.
//! 2. **Posterize** -- quantize each channel to a small number of evenly
//!    spaced levels. Strokes sampling a flattened image pick up blocky,
//!    poster-like color regions instead of smooth gradients.
//!
//! The result is wrapped in a [`PosterizedBuffer`], the color lookup
//! table the stroke generator samples from.

mod buffer;
mod posterize;
mod resize;

pub use buffer::PosterizedBuffer;
pub use posterize::{posterize, DEFAULT_LEVELS};
pub use resize::{resize_nearest, working_dimensions};
