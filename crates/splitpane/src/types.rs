//! Shared types for the split container.

use splitpane_core::geometry::{Rect, Size};
use splitpane_core::math::IVec2;

/// Identifier the host uses for one of the two panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(pub usize);

/// Orientation of a split container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Left/right panes, vertical divider. Splits the width.
    #[default]
    Horizontal,
    /// Top/bottom panes, horizontal divider. Splits the height.
    Vertical,
}

impl Orientation {
    /// Map a raw toolkit value: `0` is horizontal, `1` vertical. Anything else
    /// falls back to horizontal.
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// Get the perpendicular orientation.
    pub fn perpendicular(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Length of the split axis.
    pub fn extent(&self, size: Size<i32>) -> i32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Length of the cross axis.
    pub fn cross_extent(&self, size: Size<i32>) -> i32 {
        self.perpendicular().extent(size)
    }

    /// Component of `point` along the split axis.
    pub fn main(&self, point: IVec2) -> i32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Leading and trailing edge of `rect` along the split axis.
    pub fn axis_span(&self, rect: &Rect<i32>) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (rect.left(), rect.right()),
            Orientation::Vertical => (rect.top(), rect.bottom()),
        }
    }

    /// Replace the split-axis edges of `rect`, keeping the cross axis.
    pub fn with_axis_span(&self, rect: &Rect<i32>, lead: i32, trail: i32) -> Rect<i32> {
        match self {
            Orientation::Horizontal => Rect::from_ltrb(lead, rect.top(), trail, rect.bottom()),
            Orientation::Vertical => Rect::from_ltrb(rect.left(), lead, rect.right(), trail),
        }
    }

    /// Rectangle covering `[lead, trail]` on the split axis and `[0, cross]` on the cross axis.
    pub fn band(&self, lead: i32, trail: i32, cross: i32) -> Rect<i32> {
        match self {
            Orientation::Horizontal => Rect::from_ltrb(lead, 0, trail, cross),
            Orientation::Vertical => Rect::from_ltrb(0, lead, cross, trail),
        }
    }
}
