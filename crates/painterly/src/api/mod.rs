//! Public API for the painterly crate.
//!
//! This module provides the high-level API: the [`Painter`] builder and
//! the [`PaintError`] validation error type.

mod builder;
mod error;

pub use builder::{Painter, DEFAULT_MAX_SIDE};
pub use error::PaintError;
