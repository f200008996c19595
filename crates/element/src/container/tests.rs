use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use hideshow_primitives::{Margins, Point, PointerEvent};

use super::DragContainer;
use crate::element::HideShowDragElement;
use crate::insets::{WindowFlags, WindowInsets};
use crate::layout::{AbsoluteLayoutParams, LayoutOffset, LinearLayoutParams, RelativeLayoutParams};
use crate::listener::{ElementId, HideShowDragListener};
use crate::scheduler::{AnimationScheduler, ManualScheduler};
use crate::surface::Surface;

const STATUS_BAR: f32 = 24.0;

#[derive(Debug, PartialEq)]
struct Label(&'static str);

#[derive(Default)]
struct ShowCounter {
	shows: Cell<usize>,
	last: Cell<Option<(f32, f32)>>,
}

impl HideShowDragListener for ShowCounter {
	fn on_show(&self, _element: ElementId, x: f32, y: f32) {
		self.shows.set(self.shows.get() + 1);
		self.last.set(Some((x, y)));
	}
}

fn container(layout: impl LayoutOffset + 'static) -> DragContainer<Label> {
	let insets = Rc::new(WindowInsets::new(WindowFlags::empty(), STATUS_BAR));
	let element = HideShowDragElement::new(ElementId(1), insets);
	let mut container = DragContainer::new(Label("panel"), element, 120.0, 40.0)
		.with_layout(layout)
		.with_parent_origin(Point::new(0.0, STATUS_BAR));
	container.layout();
	container
}

#[test]
fn first_layout_seeds_show_destination_from_margins() {
	let container = container(AbsoluteLayoutParams::at(15, 25));

	assert!(!container.needs_layout());
	assert!(container.element().is_measured());
	assert_eq!(container.element().destinations().show, Point::new(15.0, 25.0));
	assert_eq!(container.screen_location(), Point::new(15.0, 25.0 + STATUS_BAR));
	assert_eq!(container.content(), &Label("panel"));
}

#[test]
fn show_settles_after_default_duration_and_notifies_once() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	container.element_mut().set_positions(10.0, 20.0, 30.0, 40.0);
	container.element_mut().set_is_shown(false);
	let counter = Rc::new(ShowCounter::default());
	container.element_mut().set_hide_show_listener(&counter);
	let mut scheduler = ManualScheduler::new();

	container.show(&mut scheduler);
	container.apply(scheduler.advance(Duration::from_millis(250)));
	assert!(container.element().is_animating());
	assert_eq!(counter.shows.get(), 0);

	container.apply(scheduler.advance(Duration::from_millis(250)));
	assert!(!container.element().is_animating());
	assert!(container.element().is_shown());
	assert_eq!(counter.shows.get(), 1);
	assert_eq!(counter.last.get(), Some((10.0, 20.0)));
	assert_eq!(container.view().position(), Point::new(10.0, 20.0));

	container.apply(scheduler.advance(Duration::from_secs(5)));
	assert_eq!(counter.shows.get(), 1);
}

#[test]
fn completed_hide_removes_element_from_render_tree() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	let mut scheduler = ManualScheduler::new();

	container.hide(&mut scheduler);
	assert!(container.is_present());
	container.apply(scheduler.advance(Duration::from_millis(500)));

	assert!(!container.is_present());
	assert!(!container.element().is_shown());

	container.show(&mut scheduler);
	assert!(container.is_present());
}

#[test]
fn toggle_twice_restores_visibility() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	let mut scheduler = ManualScheduler::new();

	container.toggle(&mut scheduler);
	container.apply(scheduler.advance(Duration::from_millis(500)));
	container.toggle(&mut scheduler);
	container.apply(scheduler.advance(Duration::from_millis(500)));

	assert!(container.element().is_shown());
	assert!(container.is_present());
	assert_eq!(scheduler.animations_started(), 2);
}

#[test]
fn drag_works_for_every_container_kind() {
	fn drag(mut container: DragContainer<Label>) -> DragContainer<Label> {
		assert!(container.on_pointer_event(PointerEvent::down(20.0, 50.0)));
		assert!(container.on_pointer_event(PointerEvent::moved(60.0, 70.0)));
		assert!(container.on_pointer_event(PointerEvent::up(60.0, 70.0)));
		container
	}

	for container in [
		drag(container(AbsoluteLayoutParams::at(10, 10))),
		drag(container(RelativeLayoutParams::at(10, 10))),
		drag(container(LinearLayoutParams::at(10, 10))),
	] {
		assert_eq!(container.view().frame().origin(), Point::new(50.0, 30.0));
		assert_eq!(container.screen_location(), Point::new(50.0, 30.0 + STATUS_BAR));
		assert_eq!(container.element().destinations().show, Point::new(50.0, 30.0 - 20.0));
	}
}

#[test]
fn drag_after_positions_updates_only_current_destination() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	container.element_mut().set_positions(10.0, 20.0, 30.0, 40.0);

	container.on_pointer_event(PointerEvent::down(5.0, 5.0));
	container.on_pointer_event(PointerEvent::moved(55.0, 41.0));
	assert_eq!(container.screen_location(), Point::new(50.0, 60.0));
	container.on_pointer_event(PointerEvent::up(55.0, 41.0));

	let destinations = container.element().destinations();
	assert_eq!(destinations.show, Point::new(50.0, 60.0 - 20.0 - STATUS_BAR));
	assert_eq!(destinations.hide, Point::new(30.0, 40.0));
}

#[test]
fn drag_keeps_animated_translation() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	container.element_mut().set_positions(0.0, 0.0, 100.0, 0.0);
	let mut scheduler = ManualScheduler::new();

	container.hide(&mut scheduler);
	container.apply(scheduler.advance(Duration::from_millis(500)));
	assert_eq!(container.view().translation(), Point::new(100.0, 0.0));

	container.on_pointer_event(PointerEvent::down(110.0, 30.0));
	container.on_pointer_event(PointerEvent::moved(120.0, 30.0));
	assert_eq!(container.view().frame().origin(), Point::new(10.0, 0.0));
	assert_eq!(container.screen_location(), Point::new(110.0, STATUS_BAR));
}

#[test]
fn drag_disabled_move_does_not_reposition() {
	let mut container = container(AbsoluteLayoutParams::at(10, 10));
	container.element_mut().set_drag_enabled(false);

	assert!(!container.on_pointer_event(PointerEvent::down(20.0, 50.0)));
	assert!(!container.on_pointer_event(PointerEvent::moved(200.0, 200.0)));

	assert_eq!(container.view().frame().origin(), Point::new(10.0, 10.0));
	assert!(!container.needs_layout());
}

#[test]
fn margins_are_cleared_except_left_top_after_drag() {
	let mut container = container(AbsoluteLayoutParams {
		margins: Margins::new(0, 0, 12, 12),
	});
	container.on_pointer_event(PointerEvent::down(0.0, 0.0));
	container.on_pointer_event(PointerEvent::moved(3.0, 4.0));

	let margins = container.view.layout_offset().map(|params| params.margins());
	assert_eq!(margins, Some(Margins::top_left(3, 4)));
}

#[test]
fn set_position_uses_live_location() {
	let mut container = container(AbsoluteLayoutParams::at(40, 80));
	container.set_position(5.0, 6.0);

	let destinations = container.element().destinations();
	assert_eq!(destinations.hide, Point::new(5.0, 6.0));
	assert_eq!(destinations.show, Point::new(40.0, 80.0 + STATUS_BAR - 20.0 - STATUS_BAR));
}

#[test]
fn teardown_cancels_pending_completion() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	let mut scheduler = ManualScheduler::new();

	container.hide(&mut scheduler);
	assert_eq!(scheduler.pending_tasks(), 1);
	container.teardown(&mut scheduler);

	assert_eq!(scheduler.pending_tasks(), 0);
	assert!(!container.element().is_animating());
	assert!(scheduler.advance(Duration::from_secs(1)).fired.is_empty());
}

#[test]
fn completion_for_another_container_is_ignored() {
	let mut first = container(AbsoluteLayoutParams::at(0, 0));
	let mut second = container(AbsoluteLayoutParams::at(0, 0));
	let mut scheduler = ManualScheduler::new();

	first.hide(&mut scheduler);
	let handle = scheduler.schedule(Duration::ZERO);
	assert!(!second.on_task_fired(handle));
	first.apply(scheduler.advance(Duration::from_millis(500)));

	assert!(second.element().is_shown());
	assert!(!first.element().is_shown());
}

#[test]
fn frames_of_another_element_are_not_applied() {
	let mut first = container(AbsoluteLayoutParams::at(0, 0));
	let mut second = container(AbsoluteLayoutParams::at(0, 0));
	first.element_mut().set_positions(0.0, 0.0, 300.0, 300.0);
	let mut scheduler = ManualScheduler::new();

	first.hide(&mut scheduler);
	let step = scheduler.advance(Duration::from_millis(250));
	let frame = step.frame.expect("hide transition is running");

	assert!(!second.apply_animation_frame(frame));
	second.apply(step);
	assert_eq!(second.view().translation(), Point::ZERO);
	assert!(!second.element().is_animating());

	assert!(first.apply_animation_frame(frame));
	assert_ne!(first.view().translation(), Point::ZERO);
}

#[test]
fn removed_element_receives_no_pointer_events() {
	let mut container = container(AbsoluteLayoutParams::at(0, 0));
	container.element_mut().set_positions(0.0, 0.0, 300.0, 300.0);
	let mut scheduler = ManualScheduler::new();
	container.hide(&mut scheduler);
	container.apply(scheduler.advance(Duration::from_millis(500)));
	assert!(!container.is_present());

	assert!(!container.on_pointer_event(PointerEvent::down(1.0, 1.0)));
	assert!(!container.on_pointer_event(PointerEvent::moved(51.0, 51.0)));
	assert!(!container.on_pointer_event(PointerEvent::up(51.0, 51.0)));

	assert!(!container.element().is_dragging());
	assert_eq!(container.view().frame().origin(), Point::ZERO);
	assert_eq!(container.element().destinations().hide, Point::new(300.0, 300.0));
}

#[test]
fn live_location_drops_half_pixel_of_odd_height() {
	let insets = Rc::new(WindowInsets::new(WindowFlags::empty(), STATUS_BAR));
	let element = HideShowDragElement::new(ElementId(2), insets);
	let mut container = DragContainer::new(Label("odd"), element, 120.0, 41.0)
		.with_layout(AbsoluteLayoutParams::at(10, 10))
		.with_parent_origin(Point::new(0.0, STATUS_BAR));
	container.layout();

	container.set_position(0.0, 0.0);
	assert_eq!(container.element().destinations().show, Point::new(10.0, 10.0 - 20.0));
}
