//! Pointer events delivered by the host and the status reported back.

use bitflags::bitflags;
use splitpane_core::math::{IVec2, Vec2, to_pixel};

bitflags! {
    /// How an event was treated.
    ///
    /// `HANDLED` means the divider logic acted on it; `CONSUMED` means the
    /// host should stop propagating it. The two are independent so a
    /// container can swallow an event it did nothing with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    /// Consumed without being acted upon.
    pub const fn swallowed() -> Self {
        Self::CONSUMED
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The gesture was taken away from the container (capture lost, window
    /// blurred, touch cancelled).
    Cancel,
}

/// A pointer event in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Vec2) -> Self {
        Self { kind, position }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Vec2::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Vec2::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Vec2::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Vec2::ZERO)
    }

    /// Position in whole pixels.
    pub fn pixel(&self) -> IVec2 {
        to_pixel(self.position)
    }
}
