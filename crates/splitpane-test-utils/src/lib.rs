//! Test utilities for splitpane.
//!
//! [`RecordingHost`] implements [`SplitHost`] by recording every call so
//! tests can assert on what a container asked its host to do.
//! [`ResizeCounter`] counts resize-completed notifications.
//!
//! ```rust
//! use splitpane::{ChildId, SplitContainer};
//! use splitpane_core::geometry::{Rect, Size};
//! use splitpane_test_utils::RecordingHost;
//!
//! let mut host = RecordingHost::new();
//! let mut split = SplitContainer::default();
//! split.set_children([ChildId(0), ChildId(1)]).unwrap();
//! split.set_size(Size::new(400, 200), &mut host).unwrap();
//!
//! assert_eq!(host.count_measures(), 2);
//! assert_eq!(host.last_placement(ChildId(1)), Some(Rect::from_ltrb(205, 0, 400, 200)));
//! ```

use std::cell::Cell;
use std::rc::Rc;

use splitpane::{ChildId, DividerStyle, DividerVisual, RedrawRequest, SplitHost};
use splitpane_core::geometry::{Rect, Size};

/// One recorded host call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Measure { child: ChildId, size: Size<i32> },
    Place { child: ChildId, bounds: Rect<i32> },
    Redraw(RedrawRequest),
    Feedback,
    DrawDivider {
        bounds: Rect<i32>,
        style: DividerStyle,
        visual: DividerVisual,
    },
}

/// A [`SplitHost`] that records calls instead of touching a UI toolkit.
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn count_measures(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Measure { .. }))
            .count()
    }

    pub fn count_placements(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Place { .. }))
            .count()
    }

    pub fn count_feedback(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Feedback))
            .count()
    }

    pub fn redraws(&self) -> Vec<RedrawRequest> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Redraw(request) => Some(*request),
                _ => None,
            })
            .collect()
    }

    /// Size most recently measured for `child`.
    pub fn last_measure(&self, child: ChildId) -> Option<Size<i32>> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Measure { child: id, size } if *id == child => Some(*size),
            _ => None,
        })
    }

    /// Bounds most recently assigned to `child`.
    pub fn last_placement(&self, child: ChildId) -> Option<Rect<i32>> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Place { child: id, bounds } if *id == child => Some(*bounds),
            _ => None,
        })
    }

    /// Divider draw calls in order.
    pub fn divider_draws(&self) -> Vec<(Rect<i32>, DividerVisual)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::DrawDivider { bounds, visual, .. } => Some((*bounds, *visual)),
                _ => None,
            })
            .collect()
    }
}

impl SplitHost for RecordingHost {
    fn measure_child(&mut self, child: ChildId, size: Size<i32>) {
        self.calls.push(HostCall::Measure { child, size });
    }

    fn place_child(&mut self, child: ChildId, bounds: Rect<i32>) {
        self.calls.push(HostCall::Place { child, bounds });
    }

    fn request_redraw(&mut self, request: RedrawRequest) {
        self.calls.push(HostCall::Redraw(request));
    }

    fn drag_feedback(&mut self) {
        self.calls.push(HostCall::Feedback);
    }

    fn draw_divider(&mut self, bounds: Rect<i32>, style: &DividerStyle, visual: DividerVisual) {
        self.calls.push(HostCall::DrawDivider {
            bounds,
            style: *style,
            visual,
        });
    }
}

/// Shared counter for resize-completed notifications.
#[derive(Debug, Clone, Default)]
pub struct ResizeCounter {
    count: Rc<Cell<usize>>,
}

impl ResizeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback suitable for `SplitContainer::on_resized`.
    pub fn listener(&self) -> impl FnMut() + 'static {
        let count = Rc::clone(&self.count);
        move || count.set(count.get() + 1)
    }

    pub fn get(&self) -> usize {
        self.count.get()
    }
}
