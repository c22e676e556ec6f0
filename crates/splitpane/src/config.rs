//! Split container configuration.

use splitpane_core::Color;

use crate::style::DividerStyles;
use crate::types::Orientation;

/// Default minimum size of either pane, in pixels.
pub const DEFAULT_MIN_CHILD_SIZE: i32 = 100;

/// Default divider thickness, in pixels.
pub const DEFAULT_SPLITTER_THICKNESS: i32 = 10;

/// Default extra grab margin around the divider, in pixels per side.
pub const DEFAULT_TOUCH_TOLERANCE: i32 = 20;

/// Configuration owned by a [`SplitContainer`](crate::SplitContainer).
///
/// Pixel values are expected to be non-negative; the builder methods clamp
/// them and [`SplitConfig::sanitized`] fixes up struct literals.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub orientation: Orientation,
    /// Neither pane may be dragged smaller than this.
    pub min_child_size: i32,
    pub splitter_thickness: i32,
    /// Extra hit-test margin around the divider on all four sides.
    pub splitter_touch_tolerance: i32,
    /// When false, every pointer event is passed through to the host.
    pub draggable: bool,
    /// Whether a draggable container consumes pointer events that miss the
    /// divider. Defaults to `true`, which keeps those events away from the
    /// panes; set `false` to let the host route them to the children.
    pub consume_missed_events: bool,
    pub divider_styles: DividerStyles,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            min_child_size: DEFAULT_MIN_CHILD_SIZE,
            splitter_thickness: DEFAULT_SPLITTER_THICKNESS,
            splitter_touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
            draggable: true,
            consume_missed_events: true,
            divider_styles: DividerStyles::default(),
        }
    }
}

impl SplitConfig {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Default::default()
        }
    }

    /// Left/right panes.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Top/bottom panes.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn min_child_size(mut self, px: i32) -> Self {
        self.min_child_size = px.max(0);
        self
    }

    pub fn splitter_thickness(mut self, px: i32) -> Self {
        self.splitter_thickness = px.max(0);
        self
    }

    pub fn touch_tolerance(mut self, px: i32) -> Self {
        self.splitter_touch_tolerance = px.max(0);
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn consume_missed_events(mut self, consume: bool) -> Self {
        self.consume_missed_events = consume;
        self
    }

    pub fn divider_styles(mut self, styles: DividerStyles) -> Self {
        self.divider_styles = styles;
        self
    }

    /// Solid divider colors for the idle and dragging states.
    pub fn divider_colors(mut self, idle: Color, dragging: Color) -> Self {
        self.divider_styles = DividerStyles::solid(idle, dragging);
        self
    }

    /// Copy with negative pixel values clamped to zero.
    pub fn sanitized(mut self) -> Self {
        self.min_child_size = self.min_child_size.max(0);
        self.splitter_thickness = self.splitter_thickness.max(0);
        self.splitter_touch_tolerance = self.splitter_touch_tolerance.max(0);
        self
    }
}
