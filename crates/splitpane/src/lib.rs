//! splitpane - a two-pane split container
//!
//! A rectangular region divided into exactly two panes by one movable
//! divider. This crate owns the geometry and interaction logic and leaves
//! widget trees, rendering and feedback to the host framework, reached
//! through the [`SplitHost`] trait:
//! - [`SplitterPosition`]: position modes resolved to pixels
//! - [`SplitFrame`]: pane and divider rectangles for a resolved offset
//! - [`DragController`]: pointer events to a clamped divider position
//! - [`SplitContainer`]: ties it together and drives the layout passes
//!
//! ## Quick Start
//!
//! ```rust
//! use splitpane::{
//!     ChildId, DividerStyle, DividerVisual, PointerEvent, Rect, RedrawRequest, Size,
//!     SplitConfig, SplitContainer, SplitHost, SplitterPosition,
//! };
//!
//! #[derive(Default)]
//! struct Panes {
//!     placed: Vec<(ChildId, Rect<i32>)>,
//! }
//!
//! impl SplitHost for Panes {
//!     fn measure_child(&mut self, _child: ChildId, _size: Size<i32>) {}
//!     fn place_child(&mut self, child: ChildId, bounds: Rect<i32>) {
//!         self.placed.push((child, bounds));
//!     }
//!     fn request_redraw(&mut self, _request: RedrawRequest) {}
//!     fn draw_divider(&mut self, _bounds: Rect<i32>, _style: &DividerStyle, _visual: DividerVisual) {}
//! }
//!
//! # fn main() -> splitpane::SplitResult<()> {
//! let mut host = Panes::default();
//! let mut split = SplitContainer::new(SplitConfig::horizontal().min_child_size(50))
//!     .with_position(SplitterPosition::Middle);
//! split.set_children([ChildId(0), ChildId(1)])?;
//! split.set_size(Size::new(400, 200), &mut host)?;
//! assert_eq!(split.splitter_rect(), Some(Rect::from_ltrb(195, 0, 205, 200)));
//!
//! // Drag the divider to the far left; it stops at the minimum pane size.
//! split.handle_pointer_event(&PointerEvent::down(200.0, 100.0), &mut host)?;
//! split.handle_pointer_event(&PointerEvent::moved(10.0, 100.0), &mut host)?;
//! split.handle_pointer_event(&PointerEvent::up(10.0, 100.0), &mut host)?;
//! assert_eq!(split.position(), SplitterPosition::Fixed(55));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod container;
pub mod drag;
pub mod error;
pub mod event;
pub mod host;
pub mod layout;
pub mod position;
pub mod style;
pub mod types;

pub use config::{
    DEFAULT_MIN_CHILD_SIZE, DEFAULT_SPLITTER_THICKNESS, DEFAULT_TOUCH_TOLERANCE, SplitConfig,
};
pub use container::{ResizeListener, SplitContainer};
pub use drag::{DragBounds, DragContext, DragController, DragOutcome, DragSession};
pub use error::{SplitError, SplitResult};
pub use event::{HandleStatus, PointerEvent, PointerEventKind};
pub use host::{RedrawRequest, SplitHost};
pub use layout::SplitFrame;
pub use position::{SplitterPosition, resolve};
pub use style::{
    DividerStyle, DividerStyles, DividerVisual, default_dragging_divider_color,
    default_idle_divider_color,
};
pub use types::{ChildId, Orientation};

pub use splitpane_core::geometry::{Rect, Size};
