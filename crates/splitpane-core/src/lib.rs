//! splitpane core
//!
//! Shared primitives for the splitpane crates: integer geometry, colors,
//! logging setup and profiling scopes.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
pub use geometry::{Rect, Size};
