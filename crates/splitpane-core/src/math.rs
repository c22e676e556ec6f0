//! Vector math re-exported from [`glam`].
//!
//! Pointer positions arrive from hosts as [`Vec2`] (sub-pixel, `f32`), while
//! the split geometry works on whole pixels. [`to_pixel`] performs the single
//! float to integer conversion used everywhere in the workspace.
//!
//! ```
//! use splitpane_core::math::{IVec2, Vec2, to_pixel};
//!
//! assert_eq!(to_pixel(Vec2::new(12.9, -3.7)), IVec2::new(12, -3));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{IVec2, Vec2};

/// Convert a pointer position to whole pixels, truncating toward zero.
#[inline]
pub fn to_pixel(point: Vec2) -> IVec2 {
    point.as_ivec2()
}
