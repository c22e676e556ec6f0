//! The calls a split container makes into its host framework.

use splitpane_core::geometry::{Rect, Size};

use crate::style::{DividerStyle, DividerVisual};
use crate::types::ChildId;

/// Area the host should repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    Region(Rect<i32>),
    Full,
}

/// Outbound interface to the UI framework hosting a split container.
///
/// All calls happen synchronously on the thread delivering events and
/// size changes. Rectangles are relative to the container origin.
pub trait SplitHost {
    /// Size `child` to exactly `size`.
    fn measure_child(&mut self, child: ChildId, size: Size<i32>);

    /// Place `child` at exactly `bounds`.
    fn place_child(&mut self, child: ChildId, bounds: Rect<i32>);

    fn request_redraw(&mut self, request: RedrawRequest);

    /// Haptic or accessibility feedback when a drag starts.
    fn drag_feedback(&mut self) {}

    /// Paint the divider rectangle.
    fn draw_divider(&mut self, bounds: Rect<i32>, style: &DividerStyle, visual: DividerVisual);
}
