use thiserror::Error;

/// Failures at the application boundary: everything the pure painting
/// core factors out (file access, codecs, parameter parsing).
#[derive(Debug, Error)]
pub enum StylizeError {
    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown stroke style: {0} (expected bristle, dab, or flat-rect)")]
    UnknownStyle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
