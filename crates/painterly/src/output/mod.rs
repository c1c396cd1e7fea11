//! The render result handed back to callers.

mod painting;

pub use painting::Painting;
