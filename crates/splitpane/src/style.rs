//! Divider appearance.

use splitpane_core::Color;

/// Default idle divider color (dark gray).
pub fn default_idle_divider_color() -> Color {
    Color::from_hex(0x444444)
}

/// Default divider color while dragging (gray).
pub fn default_dragging_divider_color() -> Color {
    Color::from_hex(0x888888)
}

/// Visual state the divider is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerVisual {
    Idle,
    Dragging,
}

/// How the host should paint a divider rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DividerStyle {
    Solid(Color),
}

/// Divider styles for both visual states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerStyles {
    pub idle: DividerStyle,
    pub dragging: DividerStyle,
}

impl Default for DividerStyles {
    fn default() -> Self {
        Self {
            idle: DividerStyle::Solid(default_idle_divider_color()),
            dragging: DividerStyle::Solid(default_dragging_divider_color()),
        }
    }
}

impl DividerStyles {
    /// Solid fills for both states.
    pub fn solid(idle: Color, dragging: Color) -> Self {
        Self {
            idle: DividerStyle::Solid(idle),
            dragging: DividerStyle::Solid(dragging),
        }
    }

    pub fn get(&self, visual: DividerVisual) -> &DividerStyle {
        match visual {
            DividerVisual::Idle => &self.idle,
            DividerVisual::Dragging => &self.dragging,
        }
    }
}
