//! Color types and conversion utilities.
//!
//! Two representations cover the pipeline's needs:
//!
//! - [`Rgb`]/[`Rgba`]: 8-bit pixels, the format of source images, sampled
//!   stroke colors and the rendered surface.
//! - [`Hsl`]: normalized hue/saturation/lightness, used only inside
//!   [`vary_brightness`] so lightness jitter cannot disturb chroma.
//!
//! # Example
//!
//! ```
//! use painterly::{vary_brightness, Rgb};
//!
//! let base = Rgb::new(200, 60, 30);
//! let lighter = vary_brightness(base, 0.1);
//! let darker = vary_brightness(base, -0.1);
//! assert_ne!(lighter, darker);
//! ```

mod hsl;
mod rgb;

pub use hsl::{vary_brightness, Hsl};
pub use rgb::{Rgb, Rgba};
