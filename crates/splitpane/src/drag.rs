//! Drag state machine for the divider.
//!
//! The controller is either idle or holds a [`DragSession`]. It only ever
//! works in pixels and knows nothing about the host; the container turns
//! each [`DragOutcome`] into redraws, layout passes and notifications.

use splitpane_core::geometry::{Rect, Size};
use splitpane_core::math::IVec2;

use crate::config::SplitConfig;
use crate::event::{PointerEvent, PointerEventKind};
use crate::types::Orientation;

/// Clamping limits for one drag, taken from the container at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragBounds {
    pub orientation: Orientation,
    /// Container length along the split axis.
    pub extent: i32,
    pub min_child_size: i32,
    pub splitter_thickness: i32,
}

impl DragBounds {
    pub fn new(config: &SplitConfig, size: Size<i32>) -> Self {
        Self {
            orientation: config.orientation,
            extent: config.orientation.extent(size),
            min_child_size: config.min_child_size,
            splitter_thickness: config.splitter_thickness,
        }
    }

    /// Clamp a divider center into `[min_child_size, extent - min_child_size]`.
    ///
    /// The lower bound wins when the container is too small for both panes.
    pub fn clamp_offset(&self, offset: i32) -> i32 {
        if offset < self.min_child_size {
            self.min_child_size
        } else if offset > self.extent - self.min_child_size {
            self.extent - self.min_child_size
        } else {
            offset
        }
    }

    /// Clamp a divider band so neither pane drops below `min_child_size`.
    fn clamp_band(&self, lead: i32, trail: i32) -> (i32, i32) {
        let max_trail = self.extent - self.min_child_size;
        if lead < self.min_child_size {
            (self.min_child_size, self.min_child_size + self.splitter_thickness)
        } else if trail > max_trail {
            (max_trail - self.splitter_thickness, max_trail)
        } else {
            (lead, trail)
        }
    }
}

/// Everything the controller needs to handle one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragContext {
    pub bounds: DragBounds,
    /// Committed divider rectangle from the last layout pass.
    pub splitter: Rect<i32>,
    pub touch_tolerance: i32,
    pub draggable: bool,
}

/// State of an in-progress divider drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Divider rectangle when the drag started.
    pub origin: Rect<i32>,
    /// Live, uncommitted divider rectangle.
    pub live: Rect<i32>,
    /// Reference point for the next delta: the press position at first,
    /// then the live rectangle's center after every move.
    pub last: IVec2,
}

/// What a pointer event did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragging is disabled; the event must pass through untouched.
    Disabled,
    /// Nothing to do with the divider.
    Missed,
    /// A press arrived while a drag was already running.
    AlreadyDragging,
    /// A press hit the divider; `snapshot` is the divider rectangle.
    Started { snapshot: Rect<i32> },
    Moved { live: Rect<i32> },
    /// The drag ended and the divider center should be committed.
    Committed { offset: i32 },
    /// The drag was abandoned; `origin` is where the divider started.
    Cancelled { origin: Rect<i32> },
}

/// Converts pointer events into divider movement.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Live divider rectangle while dragging.
    pub fn live_rect(&self) -> Option<Rect<i32>> {
        self.session.map(|s| s.live)
    }

    /// Dispatch a pointer event.
    pub fn handle(&mut self, event: &PointerEvent, ctx: &DragContext) -> DragOutcome {
        if !ctx.draggable {
            return DragOutcome::Disabled;
        }

        match event.kind {
            PointerEventKind::Down => {
                self.press(event.pixel(), ctx.splitter, ctx.touch_tolerance)
            }
            PointerEventKind::Move => self.drag_to(event.pixel(), &ctx.bounds),
            PointerEventKind::Up => self.release(&ctx.bounds),
            PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Start a drag if `point` lies within `splitter` grown by `tolerance`.
    pub fn press(&mut self, point: IVec2, splitter: Rect<i32>, tolerance: i32) -> DragOutcome {
        if self.session.is_some() {
            return DragOutcome::AlreadyDragging;
        }
        if !splitter.contains_within(point, tolerance) {
            return DragOutcome::Missed;
        }

        self.session = Some(DragSession {
            origin: splitter,
            live: splitter,
            last: point,
        });
        tracing::debug!(?point, ?splitter, "Splitter drag started");
        DragOutcome::Started { snapshot: splitter }
    }

    /// Move the live divider by the pointer delta along the split axis.
    pub fn drag_to(&mut self, point: IVec2, bounds: &DragBounds) -> DragOutcome {
        let Some(session) = self.session.as_mut() else {
            return DragOutcome::Missed;
        };

        let axis = bounds.orientation;
        // Far off-screen pointers arrive saturated at the i32 limits.
        let delta = axis.main(point).saturating_sub(axis.main(session.last));
        let (lead, trail) = axis.axis_span(&session.live);
        let (lead, trail) =
            bounds.clamp_band(lead.saturating_add(delta), trail.saturating_add(delta));

        session.live = axis.with_axis_span(&session.live, lead, trail);
        // Deltas stay relative to the clamped divider, not the raw pointer.
        session.last = session.live.center();

        tracing::trace!(?point, live = ?session.live, "Splitter dragged");
        DragOutcome::Moved { live: session.live }
    }

    /// Finish the drag and report the clamped divider center.
    pub fn release(&mut self, bounds: &DragBounds) -> DragOutcome {
        let Some(session) = self.session.take() else {
            return DragOutcome::Missed;
        };

        let offset = bounds.clamp_offset(bounds.orientation.main(session.last));
        tracing::debug!(offset, "Splitter drag released");
        DragOutcome::Committed { offset }
    }

    /// Abandon the drag without committing anything.
    pub fn cancel(&mut self) -> DragOutcome {
        let Some(session) = self.session.take() else {
            return DragOutcome::Missed;
        };

        tracing::debug!(origin = ?session.origin, "Splitter drag cancelled");
        DragOutcome::Cancelled {
            origin: session.origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DragBounds {
        DragBounds {
            orientation: Orientation::Horizontal,
            extent: 400,
            min_child_size: 50,
            splitter_thickness: 10,
        }
    }

    fn ctx() -> DragContext {
        DragContext {
            bounds: bounds(),
            splitter: Rect::from_ltrb(195, 0, 205, 200),
            touch_tolerance: 20,
            draggable: true,
        }
    }

    #[test]
    fn test_press_starts_session() {
        let mut drag = DragController::new();
        let outcome = drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());

        assert_eq!(
            outcome,
            DragOutcome::Started {
                snapshot: Rect::from_ltrb(195, 0, 205, 200)
            }
        );
        assert!(drag.is_dragging());
        assert_eq!(drag.session().unwrap().last, IVec2::new(200, 100));
    }

    #[test]
    fn test_disabled_never_transitions() {
        let mut drag = DragController::new();
        let ctx = DragContext {
            draggable: false,
            ..ctx()
        };

        assert_eq!(drag.handle(&PointerEvent::down(200.0, 100.0), &ctx), DragOutcome::Disabled);
        assert_eq!(drag.handle(&PointerEvent::moved(10.0, 100.0), &ctx), DragOutcome::Disabled);
        assert_eq!(drag.handle(&PointerEvent::up(10.0, 100.0), &ctx), DragOutcome::Disabled);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_tolerance_boundary() {
        let splitter = Rect::from_ltrb(195, 0, 205, 200);

        for point in [
            IVec2::new(175, 100),
            IVec2::new(225, 100),
            IVec2::new(200, -20),
            IVec2::new(200, 220),
        ] {
            let mut drag = DragController::new();
            assert!(
                matches!(drag.press(point, splitter, 20), DragOutcome::Started { .. }),
                "press at {point:?} should start a drag"
            );
        }

        for point in [
            IVec2::new(174, 100),
            IVec2::new(226, 100),
            IVec2::new(200, -21),
            IVec2::new(200, 221),
        ] {
            let mut drag = DragController::new();
            assert_eq!(drag.press(point, splitter, 20), DragOutcome::Missed);
        }
    }

    #[test]
    fn test_move_clamps_to_leading_minimum() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());

        let outcome = drag.handle(&PointerEvent::moved(10.0, 100.0), &ctx());
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                live: Rect::from_ltrb(50, 0, 60, 200)
            }
        );
        assert_eq!(drag.session().unwrap().last, IVec2::new(55, 100));
    }

    #[test]
    fn test_move_clamps_to_trailing_minimum() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());

        drag.handle(&PointerEvent::moved(399.0, 100.0), &ctx());
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(340, 0, 350, 200)));
    }

    #[test]
    fn test_reverse_after_clamp_moves_immediately() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());
        drag.handle(&PointerEvent::moved(10.0, 100.0), &ctx());
        drag.handle(&PointerEvent::moved(0.0, 100.0), &ctx());
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(50, 0, 60, 200)));

        // Pointer at 0 is far past the clamp, but the reference point is the
        // clamped center (55), so moving to 60 shifts the divider by 5.
        drag.handle(&PointerEvent::moved(60.0, 100.0), &ctx());
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(55, 0, 65, 200)));
    }

    #[test]
    fn test_cross_axis_motion_is_ignored() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());
        drag.handle(&PointerEvent::moved(200.0, 5.0), &ctx());
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(195, 0, 205, 200)));
    }

    #[test]
    fn test_release_commits_center() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());
        drag.handle(&PointerEvent::moved(10.0, 100.0), &ctx());

        let outcome = drag.handle(&PointerEvent::up(10.0, 100.0), &ctx());
        assert_eq!(outcome, DragOutcome::Committed { offset: 55 });
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_far_off_screen_move_saturates() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());

        drag.handle(&PointerEvent::moved(-3.0e9, 100.0), &ctx());
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(50, 0, 60, 200)));

        drag.handle(&PointerEvent::moved(3.0e9, 100.0), &ctx());
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(340, 0, 350, 200)));

        drag.handle(&PointerEvent::moved(-3.0e9, 100.0), &ctx());
        assert_eq!(
            drag.handle(&PointerEvent::up(-3.0e9, 100.0), &ctx()),
            DragOutcome::Committed { offset: 55 }
        );
    }

    #[test]
    fn test_press_with_max_tolerance() {
        let splitter = Rect::from_ltrb(195, 0, 205, 200);
        for point in [IVec2::new(200, 100), IVec2::new(-2_000_000_000, 2_000_000_000)] {
            let mut drag = DragController::new();
            assert_eq!(
                drag.press(point, splitter, i32::MAX),
                DragOutcome::Started { snapshot: splitter }
            );
        }
    }

    #[test]
    fn test_release_without_move_clamps_press_point() {
        let mut drag = DragController::new();
        let ctx = DragContext {
            splitter: Rect::from_ltrb(45, 0, 55, 200),
            ..ctx()
        };
        drag.handle(&PointerEvent::down(30.0, 100.0), &ctx);
        assert_eq!(
            drag.handle(&PointerEvent::up(30.0, 100.0), &ctx),
            DragOutcome::Committed { offset: 50 }
        );
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());
        drag.handle(&PointerEvent::moved(100.0, 100.0), &ctx());

        assert_eq!(
            drag.handle(&PointerEvent::cancel(), &ctx()),
            DragOutcome::Cancelled {
                origin: Rect::from_ltrb(195, 0, 205, 200)
            }
        );
        assert!(drag.live_rect().is_none());
        assert_eq!(drag.handle(&PointerEvent::up(100.0, 100.0), &ctx()), DragOutcome::Missed);
    }

    #[test]
    fn test_second_press_while_dragging() {
        let mut drag = DragController::new();
        drag.handle(&PointerEvent::down(200.0, 100.0), &ctx());
        assert_eq!(
            drag.handle(&PointerEvent::down(201.0, 100.0), &ctx()),
            DragOutcome::AlreadyDragging
        );
        assert_eq!(drag.session().unwrap().last, IVec2::new(200, 100));
    }

    #[test]
    fn test_vertical_drag() {
        let mut drag = DragController::new();
        let ctx = DragContext {
            bounds: DragBounds {
                orientation: Orientation::Vertical,
                extent: 200,
                min_child_size: 50,
                splitter_thickness: 10,
            },
            splitter: Rect::from_ltrb(0, 95, 400, 105),
            touch_tolerance: 20,
            draggable: true,
        };

        drag.handle(&PointerEvent::down(10.0, 100.0), &ctx);
        drag.handle(&PointerEvent::moved(10.0, 120.0), &ctx);
        assert_eq!(drag.live_rect(), Some(Rect::from_ltrb(0, 115, 400, 125)));
        assert_eq!(
            drag.handle(&PointerEvent::up(10.0, 120.0), &ctx),
            DragOutcome::Committed { offset: 120 }
        );
    }
}
