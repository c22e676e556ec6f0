//! Measure/arrange geometry for the two panes and the divider.

use splitpane_core::geometry::{Rect, Size};

use crate::position::SplitterPosition;
use crate::types::Orientation;

/// Rectangles produced by one layout pass, relative to the container origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitFrame {
    /// Container size the frame was computed for.
    pub size: Size<i32>,
    pub orientation: Orientation,
    /// Divider center after clamping into the container.
    pub offset: i32,
    pub first: Rect<i32>,
    pub splitter: Rect<i32>,
    pub second: Rect<i32>,
}

impl SplitFrame {
    /// Lay out the panes around a divider centered at `offset`.
    ///
    /// The divider spans `offset - thickness / 2 ..= offset + thickness / 2`
    /// on the split axis. Offsets and edges are clamped into the container so
    /// the three bands always tile the split axis without negative sizes.
    pub fn compute(
        size: Size<i32>,
        orientation: Orientation,
        offset: i32,
        splitter_thickness: i32,
    ) -> Self {
        let extent = orientation.extent(size).max(0);
        let cross = orientation.cross_extent(size).max(0);
        let half = splitter_thickness.max(0) / 2;

        let offset = offset.clamp(0, extent);
        let lead = (offset - half).max(0);
        let trail = (offset + half).min(extent);

        Self {
            size,
            orientation,
            offset,
            first: orientation.band(0, lead, cross),
            splitter: orientation.band(lead, trail, cross),
            second: orientation.band(trail, extent, cross),
        }
    }

    /// Resolve `position` and lay out, or `None` when the container has no area.
    pub fn resolve(
        size: Size<i32>,
        orientation: Orientation,
        position: SplitterPosition,
        min_child_size: i32,
        splitter_thickness: i32,
    ) -> Option<Self> {
        let offset = position.resolve(orientation, size, min_child_size)?;
        Some(Self::compute(size, orientation, offset, splitter_thickness))
    }

    /// Exact sizes handed to the children during the measure pass.
    pub fn child_sizes(&self) -> [Size<i32>; 2] {
        [self.first.size(), self.second.size()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_horizontal() {
        let frame = SplitFrame::resolve(
            Size::new(400, 200),
            Orientation::Horizontal,
            SplitterPosition::Middle,
            50,
            10,
        )
        .unwrap();

        assert_eq!(frame.first, Rect::from_ltrb(0, 0, 195, 200));
        assert_eq!(frame.splitter, Rect::from_ltrb(195, 0, 205, 200));
        assert_eq!(frame.second, Rect::from_ltrb(205, 0, 400, 200));
        assert_eq!(frame.child_sizes(), [Size::new(195, 200), Size::new(195, 200)]);
    }

    #[test]
    fn test_middle_vertical() {
        let frame = SplitFrame::resolve(
            Size::new(400, 200),
            Orientation::Vertical,
            SplitterPosition::Middle,
            50,
            10,
        )
        .unwrap();

        assert_eq!(frame.first, Rect::from_ltrb(0, 0, 400, 95));
        assert_eq!(frame.splitter, Rect::from_ltrb(0, 95, 400, 105));
        assert_eq!(frame.second, Rect::from_ltrb(0, 105, 400, 200));
    }

    #[test]
    fn test_unresolved_skips() {
        assert!(
            SplitFrame::resolve(
                Size::new(0, 200),
                Orientation::Horizontal,
                SplitterPosition::Middle,
                50,
                10,
            )
            .is_none()
        );
    }

    #[test]
    fn test_odd_thickness_uses_half_floor() {
        let frame = SplitFrame::compute(Size::new(100, 10), Orientation::Horizontal, 50, 7);
        assert_eq!(frame.splitter, Rect::from_ltrb(47, 0, 53, 10));
    }

    #[test]
    fn test_offset_outside_container_is_clamped() {
        let size = Size::new(100, 10);
        let before = SplitFrame::compute(size, Orientation::Horizontal, -40, 10);
        assert_eq!(before.offset, 0);
        assert_eq!(before.first, Rect::from_ltrb(0, 0, 0, 10));
        assert_eq!(before.splitter, Rect::from_ltrb(0, 0, 5, 10));

        let after = SplitFrame::compute(size, Orientation::Horizontal, 500, 10);
        assert_eq!(after.offset, 100);
        assert_eq!(after.splitter, Rect::from_ltrb(95, 0, 100, 10));
        assert_eq!(after.second, Rect::from_ltrb(100, 0, 100, 10));
    }

    #[test]
    fn test_zero_thickness() {
        let frame = SplitFrame::compute(Size::new(100, 10), Orientation::Horizontal, 30, 0);
        assert_eq!(frame.splitter.width, 0);
        assert_eq!(frame.first.right(), 30);
        assert_eq!(frame.second.left(), 30);
    }
}
