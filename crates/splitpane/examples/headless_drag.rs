//! Headless demo: drives a split container through a full drag gesture
//! with logging enabled. Run with `RUST_LOG=splitpane=trace` to see every move.

use splitpane::{
    ChildId, DividerStyle, DividerVisual, PointerEvent, RedrawRequest, SplitConfig,
    SplitContainer, SplitHost, SplitResult, SplitterPosition,
};
use splitpane_core::geometry::{Rect, Size};
use splitpane_core::{Color, logging};

/// Prints every host call instead of rendering anything.
struct ConsoleHost;

impl SplitHost for ConsoleHost {
    fn measure_child(&mut self, child: ChildId, size: Size<i32>) {
        println!("measure {:?} -> {}x{}", child, size.width, size.height);
    }

    fn place_child(&mut self, child: ChildId, bounds: Rect<i32>) {
        println!(
            "place   {:?} -> ({},{})-({},{})",
            child,
            bounds.left(),
            bounds.top(),
            bounds.right(),
            bounds.bottom()
        );
    }

    fn request_redraw(&mut self, request: RedrawRequest) {
        println!("redraw  {:?}", request);
    }

    fn drag_feedback(&mut self) {
        println!("feedback");
    }

    fn draw_divider(&mut self, bounds: Rect<i32>, style: &DividerStyle, visual: DividerVisual) {
        println!("divider {:?} {:?} {:?}", visual, bounds, style);
    }
}

fn main() -> SplitResult<()> {
    logging::init();

    let mut host = ConsoleHost;
    let config = SplitConfig::horizontal()
        .min_child_size(50)
        .divider_colors(Color::from_hex(0x30303c), Color::from_hex(0x5a78c8));
    let mut split = SplitContainer::new(config).with_position(SplitterPosition::Middle);
    split.on_resized(|| println!("resized"));

    split.set_children([ChildId(0), ChildId(1)])?;
    split.set_size(Size::new(400, 200), &mut host)?;
    split.draw(&mut host);

    for event in [
        PointerEvent::down(200.0, 100.0),
        PointerEvent::moved(120.0, 100.0),
        PointerEvent::moved(10.0, 100.0),
        PointerEvent::moved(80.0, 100.0),
    ] {
        let status = split.handle_pointer_event(&event, &mut host)?;
        println!("{:?} -> {:?}", event.kind, status);
        split.draw(&mut host);
    }

    split.handle_pointer_event(&PointerEvent::up(80.0, 100.0), &mut host)?;
    println!("committed {:?}", split.position());
    Ok(())
}
