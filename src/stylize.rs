//! The full stylization flow: decode, validate, paint, encode.
//!
//! This is the hardened boundary around the `painterly` core. The core
//! itself degrades gracefully on hostile parameters (it just paints
//! nothing); callers arriving here get loud errors instead, plus seed
//! resolution so every run is reproducible from its log line.

use std::path::Path;

use painterly::{PaintError, Painter, Rgba, StrokeParams, StrokeStyle};

use crate::error::StylizeError;
use crate::image_io;

/// Resolved settings for one stylization run.
#[derive(Debug, Clone, Copy)]
pub struct StylizeOptions {
    /// Which stroke style to paint with.
    pub style: StrokeStyle,
    /// Stroke count multiplier, strictly positive.
    pub density: f32,
    /// Base stroke size in pixels, strictly positive.
    pub base_size: f32,
    /// Posterization levels per channel, at least 2.
    pub levels: u8,
    /// Cap on the longer side of the working image.
    pub max_side: usize,
    /// Fixed random seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for StylizeOptions {
    fn default() -> Self {
        Self {
            style: StrokeStyle::default(),
            density: 1.0,
            base_size: 4.0,
            levels: painterly::DEFAULT_LEVELS,
            max_side: painterly::DEFAULT_MAX_SIDE,
            seed: None,
        }
    }
}

/// Look up a stroke style by its CLI name (case-insensitive).
pub fn parse_style(name: &str) -> Result<StrokeStyle, StylizeError> {
    match name {
        s if s.eq_ignore_ascii_case("bristle") => Ok(StrokeStyle::bristle()),
        s if s.eq_ignore_ascii_case("dab") => Ok(StrokeStyle::dab()),
        s if s.eq_ignore_ascii_case("flat-rect") => Ok(StrokeStyle::flat_rect()),
        other => Err(StylizeError::UnknownStyle(other.to_string())),
    }
}

/// Stylize an image file, returning the painting as PNG bytes.
pub fn stylize_file(input: &Path, options: &StylizeOptions) -> Result<Vec<u8>, StylizeError> {
    tracing::debug!(input = %input.display(), "Loading source image");
    let (pixels, width, height) = image_io::load_rgba(input)?;
    stylize_pixels(&pixels, width, height, options)
}

/// Stylize an in-memory RGBA image, returning the painting as PNG bytes.
pub fn stylize_pixels(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    options: &StylizeOptions,
) -> Result<Vec<u8>, StylizeError> {
    validate(options)?;

    // Resolve a concrete seed up front so the run can be reproduced.
    let seed = options.seed.unwrap_or_else(rand::random);

    let (work_width, work_height) =
        painterly::preprocess::working_dimensions(width, height, options.max_side);
    tracing::debug!(
        source_width = width,
        source_height = height,
        work_width,
        work_height,
        "Resolved working resolution"
    );
    tracing::info!(
        style = options.style.name(),
        strokes = options.style.stroke_count(work_width, work_height, options.density),
        seed,
        "Painting"
    );

    let painting = Painter::new(options.style)
        .density(options.density)
        .base_size(options.base_size)
        .posterize_levels(options.levels)
        .max_side(options.max_side)
        .seed(seed)
        .paint(pixels, width, height);

    let png_bytes = image_io::encode_png(&painting)?;
    tracing::info!(bytes = png_bytes.len(), "Encoded painting");
    Ok(png_bytes)
}

/// Reject parameters the core would otherwise degrade on silently.
fn validate(options: &StylizeOptions) -> Result<(), StylizeError> {
    if let Err(PaintError::InvalidParameter { name, value }) = StrokeParams::new()
        .density(options.density)
        .base_size(options.base_size)
        .validated()
    {
        return Err(StylizeError::InvalidParameter(format!(
            "{name} must be a positive number (got {value})"
        )));
    }
    if options.levels < 2 {
        return Err(StylizeError::InvalidParameter(format!(
            "levels must be at least 2 (got {})",
            options.levels
        )));
    }
    Ok(())
}
