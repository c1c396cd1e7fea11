//! Image file boundary: decoding source files and encoding results.
//!
//! The painting core works on raw RGBA pixels and knows nothing about
//! file formats. This module owns both codecs: any format the `image`
//! crate recognizes on the way in, RGBA PNG on the way out.

use std::io::Cursor;
use std::path::Path;

use painterly::{Painting, Rgba};

use crate::error::StylizeError;

/// Read and decode an image file to RGBA pixels.
///
/// Returns the pixel buffer in row-major order together with the image
/// dimensions. The file is read up front so a missing file surfaces as
/// an IO error and a corrupt one as a decode error.
pub fn load_rgba(path: &Path) -> Result<(Vec<Rgba>, usize, usize), StylizeError> {
    let bytes = std::fs::read(path)?;
    let decoded =
        image::load_from_memory(&bytes).map_err(|e| StylizeError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
        .collect();
    Ok((pixels, width as usize, height as usize))
}

/// Encode a rendered painting as an RGBA PNG byte stream.
pub fn encode_png(painting: &Painting) -> Result<Vec<u8>, StylizeError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(
            &mut buf,
            painting.width() as u32,
            painting.height() as u32,
        );
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| StylizeError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(painting.as_rgba_bytes())
            .map_err(|e| StylizeError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
