//! Splitter position modes and their resolution to pixel offsets.

use splitpane_core::geometry::Size;

use crate::error::{SplitError, SplitResult};
use crate::types::Orientation;

/// Where the divider sits along the split axis.
///
/// The offset always refers to the divider's center, measured from the
/// leading edge (left for horizontal splits, top for vertical ones).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SplitterPosition {
    /// `min_child_size` from the leading edge.
    StartMin,
    /// `min_child_size` from the trailing edge.
    EndMin,
    /// Half of the extent.
    #[default]
    Middle,
    /// Absolute pixel offset.
    Fixed(i32),
    /// Fraction of the extent, `0.0..=1.0`.
    Percentage(f32),
}

impl SplitterPosition {
    /// Build a validated [`SplitterPosition::Percentage`].
    pub fn percentage(ratio: f32) -> SplitResult<Self> {
        if ratio.is_finite() && (0.0..=1.0).contains(&ratio) {
            Ok(SplitterPosition::Percentage(ratio))
        } else {
            Err(SplitError::InvalidPercentage(ratio))
        }
    }

    /// Resolve against a container size. See [`resolve`].
    pub fn resolve(
        &self,
        orientation: Orientation,
        size: Size<i32>,
        min_child_size: i32,
    ) -> Option<i32> {
        resolve(*self, orientation, size.width, size.height, min_child_size)
    }
}

/// Resolve a position to a pixel offset along the split axis.
///
/// Returns `None` when the container has no area yet. `Fixed` offsets are
/// returned untouched; clamping happens in layout and drag handling.
pub fn resolve(
    position: SplitterPosition,
    orientation: Orientation,
    width: i32,
    height: i32,
    min_child_size: i32,
) -> Option<i32> {
    let size = Size::new(width, height);
    if !size.has_area() {
        return None;
    }

    let extent = orientation.extent(size);
    let px = match position {
        SplitterPosition::StartMin => min_child_size,
        SplitterPosition::EndMin => extent - min_child_size,
        SplitterPosition::Middle => extent / 2,
        SplitterPosition::Fixed(px) => px,
        SplitterPosition::Percentage(ratio) => (f64::from(extent) * f64::from(ratio)).floor() as i32,
    };
    Some(px)
}
