//! painterly: Brush-stroke stylization for raster images
//!
//! This library turns a photograph (or any raster image) into a painted
//! rendition: thousands of small randomized brush strokes, each colored
//! from the image underneath it, composited over a black canvas.
//!
//! # Quick Start
//!
//! The [`Painter`] builder is the primary entry point:
//!
//! ```
//! use painterly::{Painter, Rgba, StrokeStyle};
//!
//! let pixels = vec![Rgba::opaque(200, 60, 20); 32 * 32];
//!
//! let painting = Painter::new(StrokeStyle::bristle())
//!     .density(1.0)
//!     .base_size(4.0)
//!     .seed(42)
//!     .paint(&pixels, 32, 32);
//!
//! assert_eq!(painting.width(), 32);
//! assert_eq!(painting.height(), 32);
//! ```
//!
//! # Stroke Styles
//!
//! Three brush styles are available via [`StrokeStyle`]:
//!
//! - **Bristle** (default): fans of thin overlapping rectangles with
//!   per-bristle brightness and opacity wobble; streaky, oil-like
//! - **Dab**: chains of small rotated ellipses; stippled, impressionist
//! - **FlatRect**: single high-opacity rectangles; palette-knife, collage
//!
//! Each variant carries its tuned sampling constants as plain data, so a
//! custom look is a struct literal away (see [`BristleStyle`] and
//! friends).
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA input                  (decoded by the caller)
//!     |
//!     v
//! [Resize]                    (nearest-neighbor, longest side capped
//!     |                        at 768; never upscaled)
//!     v
//! [Posterize]                 (each channel quantized to N levels;
//!     |                        blocky color regions)
//!     v
//! PosterizedBuffer            (the color lookup table)
//!     |
//! ╔═══════════════════════════════════════════╗
//! ║  Stroke loop (one pass, paint order)      ║
//! ║                                           ║
//! ║  random anchor (x, y)                     ║
//! ║      |                                    ║
//! ║  sample posterized color at anchor        ║
//! ║      |                                    ║
//! ║  derive size/length/rotation from style   ║
//! ║      |                                    ║
//! ║  emit dabs (rects or ellipses) with       ║
//! ║  jittered lightness and opacity           ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! [Render]                    (clear to opaque black, then source-over
//!     |                        composite every dab in world space)
//!     v
//! Painting                    (RGBA bytes, ready for PNG encoding)
//! ```
//!
//! # Color Handling
//!
//! Stroke color starts as the posterized pixel under the stroke anchor
//! and may only deviate through [`vary_brightness`]: a round trip
//! through HSL that nudges lightness and leaves hue and saturation
//! untouched. This is what keeps the output looking like the source
//! image painted, rather than repainted in new colors -- every stroke
//! stays on the source's palette, just lighter or darker.
//!
//! Posterization happens before any color is sampled, and after the
//! resize, so lookup coordinates and render coordinates agree. The
//! resize is deliberately nearest-neighbor: smoother filters would feed
//! the posterizer blended edge colors and dissolve the flat regions the
//! strokes are supposed to pick up.
//!
//! # Determinism
//!
//! All randomness flows through one generator owned by the stroke loop.
//! Fix a seed on the [`Painter`] and the output is byte-for-byte
//! reproducible across runs; leave it unset and each paint draws fresh
//! OS entropy. There is no ambient RNG anywhere in the crate.

pub mod api;
pub mod color;
pub mod output;
pub mod preprocess;
pub mod render;
pub mod stroke;


pub use api::{PaintError, Painter, DEFAULT_MAX_SIDE};
pub use color::{vary_brightness, Hsl, Rgb, Rgba};
pub use output::Painting;
pub use preprocess::{PosterizedBuffer, DEFAULT_LEVELS};
pub use render::Canvas;
pub use stroke::{
    BristleStyle, Dab, DabShape, DabStyle, FlatRectStyle, Span, StrokeDescriptor, StrokeGenerator,
    StrokeParams, StrokeStyle,
};
