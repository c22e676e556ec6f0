//! The split container: configuration, children, layout passes and pointer dispatch.

use splitpane_core::geometry::{Rect, Size};
use splitpane_core::profiling::profile_function;

use crate::config::SplitConfig;
use crate::drag::{DragBounds, DragContext, DragController, DragOutcome};
use crate::error::{SplitError, SplitResult};
use crate::event::{HandleStatus, PointerEvent};
use crate::host::{RedrawRequest, SplitHost};
use crate::layout::SplitFrame;
use crate::position::SplitterPosition;
use crate::style::{DividerStyles, DividerVisual};
use crate::types::{ChildId, Orientation};

/// Callback fired after a drag commits a new splitter position.
pub type ResizeListener = Box<dyn FnMut()>;

/// A container split into exactly two panes by a draggable divider.
///
/// The host drives it with size changes, configuration changes and pointer
/// events; the container answers by measuring and placing its two children
/// through a [`SplitHost`]. Layout only runs with exactly two children
/// attached.
pub struct SplitContainer {
    config: SplitConfig,
    position: SplitterPosition,
    size: Size<i32>,
    children: Vec<ChildId>,
    /// Last successful layout. Kept when a later pass is skipped.
    frame: Option<SplitFrame>,
    /// Frame computed by `measure`, consumed by the matching `arrange`.
    measured: Option<SplitFrame>,
    drag: DragController,
    on_resized: Option<ResizeListener>,
}

impl std::fmt::Debug for SplitContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitContainer")
            .field("config", &self.config)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("children", &self.children)
            .field("frame", &self.frame)
            .field("drag", &self.drag)
            .field("on_resized", &self.on_resized.is_some())
            .finish()
    }
}

impl Default for SplitContainer {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

impl SplitContainer {
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config: config.sanitized(),
            position: SplitterPosition::default(),
            size: Size::new(0, 0),
            children: Vec::with_capacity(2),
            frame: None,
            measured: None,
            drag: DragController::new(),
            on_resized: None,
        }
    }

    /// Left/right panes with default configuration.
    pub fn horizontal() -> Self {
        Self::new(SplitConfig::horizontal())
    }

    /// Top/bottom panes with default configuration.
    pub fn vertical() -> Self {
        Self::new(SplitConfig::vertical())
    }

    /// Set the initial splitter position.
    pub fn with_position(mut self, position: SplitterPosition) -> Self {
        self.position = position;
        self
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Committed splitter position.
    pub fn position(&self) -> SplitterPosition {
        self.position
    }

    pub fn size(&self) -> Size<i32> {
        self.size
    }

    pub fn children(&self) -> &[ChildId] {
        &self.children
    }

    /// Last successfully computed layout.
    pub fn frame(&self) -> Option<&SplitFrame> {
        self.frame.as_ref()
    }

    /// Committed divider rectangle.
    pub fn splitter_rect(&self) -> Option<Rect<i32>> {
        self.frame.map(|f| f.splitter)
    }

    /// Live divider rectangle while a drag is running.
    pub fn live_splitter_rect(&self) -> Option<Rect<i32>> {
        self.drag.live_rect()
    }

    /// The committed position resolved against the current size.
    pub fn resolved_offset(&self) -> Option<i32> {
        self.position
            .resolve(self.config.orientation, self.size, self.config.min_child_size)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // Children

    pub fn attach_child(&mut self, child: ChildId) -> SplitResult<()> {
        if self.children.contains(&child) {
            return Err(SplitError::DuplicateChild(child));
        }
        self.children.push(child);
        Ok(())
    }

    pub fn detach_child(&mut self, child: ChildId) -> SplitResult<()> {
        let index = self
            .children
            .iter()
            .position(|c| *c == child)
            .ok_or(SplitError::UnknownChild(child))?;
        self.children.remove(index);
        self.measured = None;
        Ok(())
    }

    /// Replace all children at once.
    pub fn set_children(&mut self, children: impl IntoIterator<Item = ChildId>) -> SplitResult<()> {
        let mut next = Vec::with_capacity(2);
        for child in children {
            if next.contains(&child) {
                return Err(SplitError::DuplicateChild(child));
            }
            next.push(child);
        }
        self.children = next;
        self.measured = None;
        Ok(())
    }

    fn has_two_children(&self) -> bool {
        self.children.len() == 2
    }

    fn pair(&self) -> SplitResult<(ChildId, ChildId)> {
        match self.children.as_slice() {
            [first, second] => Ok((*first, *second)),
            other => {
                tracing::warn!(found = other.len(), "Layout aborted: split container needs two children");
                Err(SplitError::ChildCount { found: other.len() })
            }
        }
    }

    // Resize notification

    /// Install or clear the resize-completed callback.
    pub fn set_resize_listener(&mut self, listener: Option<ResizeListener>) {
        self.on_resized = listener;
    }

    /// Install a resize-completed callback.
    pub fn on_resized(&mut self, listener: impl FnMut() + 'static) {
        self.on_resized = Some(Box::new(listener));
    }

    fn notify_resized(&mut self) {
        if let Some(listener) = self.on_resized.as_mut() {
            listener();
        }
    }

    // Configuration

    /// Replace the whole configuration, re-laying out if anything changed.
    pub fn set_config(&mut self, config: SplitConfig, host: &mut dyn SplitHost) -> SplitResult<()> {
        let config = config.sanitized();
        if config == self.config {
            return Ok(());
        }

        if self.drag.is_dragging() {
            self.drag.cancel();
            host.request_redraw(RedrawRequest::Full);
        }
        tracing::debug!(?config, "Split configuration changed");
        self.config = config;

        if self.has_two_children() {
            self.relayout(host)?;
        }
        Ok(())
    }

    fn update_config(
        &mut self,
        host: &mut dyn SplitHost,
        update: impl FnOnce(&mut SplitConfig),
    ) -> SplitResult<()> {
        let mut config = self.config.clone();
        update(&mut config);
        self.set_config(config, host)
    }

    pub fn set_orientation(&mut self, orientation: Orientation, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.orientation = orientation)
    }

    pub fn set_min_child_size(&mut self, px: i32, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.min_child_size = px)
    }

    pub fn set_splitter_thickness(&mut self, px: i32, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.splitter_thickness = px)
    }

    pub fn set_touch_tolerance(&mut self, px: i32, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.splitter_touch_tolerance = px)
    }

    pub fn set_draggable(&mut self, draggable: bool, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.draggable = draggable)
    }

    pub fn set_consume_missed_events(&mut self, consume: bool, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.consume_missed_events = consume)
    }

    pub fn set_divider_styles(&mut self, styles: DividerStyles, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.update_config(host, |c| c.divider_styles = styles)
    }

    /// Commit a new splitter position and re-lay out when two children are attached.
    pub fn set_position(&mut self, position: SplitterPosition, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.position = position;
        if self.has_two_children() {
            self.relayout(host)?;
        }
        Ok(())
    }

    /// Record a new container size from the host and lay out for it.
    pub fn set_size(&mut self, size: Size<i32>, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.size = size;
        self.relayout(host)
    }

    // Layout

    /// Run both layout passes.
    pub fn relayout(&mut self, host: &mut dyn SplitHost) -> SplitResult<()> {
        self.measure(host)?;
        self.arrange(host)?;
        Ok(())
    }

    fn compute_frame(&self) -> Option<SplitFrame> {
        SplitFrame::resolve(
            self.size,
            self.config.orientation,
            self.position,
            self.config.min_child_size,
            self.config.splitter_thickness,
        )
    }

    /// Measure pass: size both children exactly.
    ///
    /// Returns `Ok(None)` and leaves the previous layout in place when the
    /// container has no area.
    pub fn measure(&mut self, host: &mut dyn SplitHost) -> SplitResult<Option<SplitFrame>> {
        profile_function!();
        let (first, second) = self.pair()?;

        let Some(frame) = self.compute_frame() else {
            tracing::trace!(size = ?self.size, "Measure skipped: container has no area");
            self.measured = None;
            return Ok(None);
        };

        let [first_size, second_size] = frame.child_sizes();
        host.measure_child(first, first_size);
        host.measure_child(second, second_size);

        self.measured = Some(frame);
        Ok(Some(frame))
    }

    /// Arrange pass: place both children and record the divider rectangle.
    ///
    /// Reuses the frame from the preceding `measure` when the inputs have not
    /// changed, so both passes agree on the splitter offset.
    pub fn arrange(&mut self, host: &mut dyn SplitHost) -> SplitResult<Option<SplitFrame>> {
        profile_function!();
        let (first, second) = self.pair()?;

        let measured = self
            .measured
            .take()
            .filter(|f| f.size == self.size && f.orientation == self.config.orientation);
        let Some(frame) = measured.or_else(|| self.compute_frame()) else {
            tracing::trace!(size = ?self.size, "Arrange skipped: container has no area");
            return Ok(None);
        };

        host.place_child(first, frame.first);
        host.place_child(second, frame.second);

        self.frame = Some(frame);
        Ok(Some(frame))
    }

    // Input

    fn missed_status(&self) -> HandleStatus {
        if self.config.consume_missed_events {
            HandleStatus::swallowed()
        } else {
            HandleStatus::ignored()
        }
    }

    /// Route a pointer event through the drag controller.
    ///
    /// Errors only when a committed drag triggers a layout pass that fails.
    pub fn handle_pointer_event(
        &mut self,
        event: &PointerEvent,
        host: &mut dyn SplitHost,
    ) -> SplitResult<HandleStatus> {
        profile_function!();
        if !self.config.draggable {
            return Ok(HandleStatus::ignored());
        }
        // Nothing to grab before the first layout.
        let Some(frame) = self.frame else {
            return Ok(self.missed_status());
        };

        let ctx = DragContext {
            bounds: DragBounds::new(&self.config, self.size),
            splitter: frame.splitter,
            touch_tolerance: self.config.splitter_touch_tolerance,
            draggable: self.config.draggable,
        };

        match self.drag.handle(event, &ctx) {
            DragOutcome::Disabled => Ok(HandleStatus::ignored()),
            DragOutcome::Missed => Ok(self.missed_status()),
            DragOutcome::AlreadyDragging => Ok(HandleStatus::consumed()),
            DragOutcome::Started { snapshot } => {
                host.drag_feedback();
                host.request_redraw(RedrawRequest::Region(snapshot));
                Ok(HandleStatus::consumed())
            }
            DragOutcome::Moved { .. } => {
                host.request_redraw(RedrawRequest::Full);
                Ok(HandleStatus::consumed())
            }
            DragOutcome::Committed { offset } => {
                self.position = SplitterPosition::Fixed(offset);
                self.relayout(host)?;
                host.request_redraw(RedrawRequest::Full);
                tracing::debug!(offset, "Splitter position committed");
                self.notify_resized();
                Ok(HandleStatus::consumed())
            }
            DragOutcome::Cancelled { .. } => {
                host.request_redraw(RedrawRequest::Full);
                Ok(HandleStatus::consumed())
            }
        }
    }

    // Drawing

    /// Draw the committed divider, plus the live divider on top while dragging.
    pub fn draw(&self, host: &mut dyn SplitHost) {
        let styles = &self.config.divider_styles;
        if let Some(frame) = &self.frame {
            host.draw_divider(frame.splitter, styles.get(DividerVisual::Idle), DividerVisual::Idle);
        }
        if let Some(live) = self.drag.live_rect() {
            host.draw_divider(live, styles.get(DividerVisual::Dragging), DividerVisual::Dragging);
        }
    }
}
