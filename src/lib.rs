//! Impasto - painterly image stylizer
//!
//! Command-line front end for the `painterly` stroke pipeline.
//! This library exposes modules for integration testing.

pub mod error;
pub mod image_io;
pub mod stylize;
