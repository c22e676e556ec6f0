//! Property tests for the layout tiling and drag clamping invariants.

use proptest::prelude::*;
use splitpane::{
    ChildId, Orientation, PointerEvent, SplitConfig, SplitContainer, SplitFrame, SplitterPosition,
};
use splitpane_core::geometry::Size;
use splitpane_test_utils::RecordingHost;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn position() -> impl Strategy<Value = SplitterPosition> {
    prop_oneof![
        Just(SplitterPosition::StartMin),
        Just(SplitterPosition::EndMin),
        Just(SplitterPosition::Middle),
        (-500i32..3000).prop_map(SplitterPosition::Fixed),
        (0.0f32..=1.0).prop_map(SplitterPosition::Percentage),
    ]
}

proptest! {
    #[test]
    fn frame_tiles_split_axis(
        width in 1i32..2000,
        height in 1i32..2000,
        min_child_size in 0i32..1500,
        thickness in 0i32..100,
        orientation in orientation(),
        position in position(),
    ) {
        let size = Size::new(width, height);
        let frame = SplitFrame::resolve(size, orientation, position, min_child_size, thickness)
            .expect("positive size always resolves");

        let extent = orientation.extent(size);
        let cross = orientation.cross_extent(size);
        let (first_lead, first_trail) = orientation.axis_span(&frame.first);
        let (split_lead, split_trail) = orientation.axis_span(&frame.splitter);
        let (second_lead, second_trail) = orientation.axis_span(&frame.second);

        // Exact cover of the split axis, in order.
        prop_assert_eq!(first_lead, 0);
        prop_assert_eq!(first_trail, split_lead);
        prop_assert_eq!(split_trail, second_lead);
        prop_assert_eq!(second_trail, extent);

        for rect in [frame.first, frame.splitter, frame.second] {
            prop_assert!(rect.width >= 0 && rect.height >= 0);
            prop_assert_eq!(orientation.cross_extent(rect.size()), cross);
        }

        prop_assert!(!frame.first.overlaps(&frame.second));
        prop_assert!(!frame.first.overlaps(&frame.splitter));
        prop_assert!(!frame.second.overlaps(&frame.splitter));
    }

    #[test]
    fn committed_drag_stays_within_min_child_bounds(
        extent in 100i32..1200,
        min_child_size in 0i32..50,
        thickness in 0i32..20,
        moves in prop::collection::vec(-2000i32..2000, 1..20),
        orientation in orientation(),
    ) {
        let mut host = RecordingHost::new();
        let config = SplitConfig::new(orientation)
            .min_child_size(min_child_size)
            .splitter_thickness(thickness)
            .touch_tolerance(0);
        let mut split = SplitContainer::new(config);
        split.set_children([ChildId(0), ChildId(1)]).unwrap();
        split.set_size(Size::new(extent, extent), &mut host).unwrap();

        let center = split.splitter_rect().unwrap().center();
        let at = |main: i32| match orientation {
            Orientation::Horizontal => (main as f32, center.y as f32),
            Orientation::Vertical => (center.x as f32, main as f32),
        };

        let (x, y) = at(orientation.main(center));
        split.handle_pointer_event(&PointerEvent::down(x, y), &mut host).unwrap();
        prop_assert!(split.is_dragging());

        let mut last = (x, y);
        for m in moves {
            last = at(m);
            split.handle_pointer_event(&PointerEvent::moved(last.0, last.1), &mut host).unwrap();
        }
        split.handle_pointer_event(&PointerEvent::up(last.0, last.1), &mut host).unwrap();

        match split.position() {
            SplitterPosition::Fixed(px) => {
                prop_assert!(px >= min_child_size);
                prop_assert!(px <= extent - min_child_size);
            }
            other => prop_assert!(false, "expected a fixed position, got {:?}", other),
        }
    }
}
