//! Renderable container owning a controlled element.
//!
//! [`DragContainer`] composes pluggable content with the view state the
//! controller manipulates and the [`HideShowDragElement`] itself. Hosts feed
//! it pointer events, layout passes, animation frames, and fired completion
//! tasks; it routes each to the controller with its own view as the
//! [`Surface`].

use hideshow_primitives::{Point, PointerEvent, Rect};

use crate::element::HideShowDragElement;
use crate::layout::LayoutOffset;
use crate::scheduler::{Advance, AnimationScheduler, Frame, TaskHandle};
use crate::surface::Surface;

/// View state of the element inside its parent.
///
/// The element's screen location is the parent's screen origin plus its
/// layout frame origin plus the animated translation.
pub struct ElementView {
	parent_origin: Point,
	frame: Rect,
	translation: Point,
	present: bool,
	layout: Option<Box<dyn LayoutOffset>>,
	layout_requested: bool,
}

impl ElementView {
	fn new(width: f32, height: f32) -> Self {
		Self {
			parent_origin: Point::ZERO,
			frame: Rect::new(0.0, 0.0, width, height),
			translation: Point::ZERO,
			present: true,
			layout: None,
			layout_requested: true,
		}
	}

	/// Layout bounds within the parent.
	pub fn frame(&self) -> Rect {
		self.frame
	}

	/// Offset applied on top of the layout frame by animations.
	pub fn translation(&self) -> Point {
		self.translation
	}

	/// Moves the animated position property, keeping the layout frame.
	pub fn set_position(&mut self, position: Point) {
		self.translation = position - self.frame.origin();
	}

	/// Places the frame at the layout offset, or keeps it where it is if the
	/// parent kind has no repositionable offset.
	fn place(&mut self) {
		if let Some(layout) = &self.layout {
			self.frame = self.frame.with_origin(layout.offset());
		}
	}
}

impl Surface for ElementView {
	fn set_present(&mut self, present: bool) {
		self.present = present;
	}

	fn is_present(&self) -> bool {
		self.present
	}

	fn position(&self) -> Point {
		self.frame.origin() + self.translation
	}

	fn screen_location(&self) -> Point {
		self.parent_origin + self.position()
	}

	fn height(&self) -> f32 {
		self.frame.height
	}

	fn layout_offset(&mut self) -> Option<&mut dyn LayoutOffset> {
		match &mut self.layout {
			Some(layout) => Some(&mut **layout),
			None => None,
		}
	}

	fn request_layout(&mut self) {
		self.place();
		self.layout_requested = true;
	}
}

/// A container rendering `content` at a position driven by a [`HideShowDragElement`].
pub struct DragContainer<C> {
	content: C,
	view: ElementView,
	element: HideShowDragElement,
}

impl<C> DragContainer<C> {
	/// Creates a container for `content` with the given size, at the parent's origin.
	pub fn new(content: C, element: HideShowDragElement, width: f32, height: f32) -> Self {
		Self {
			content,
			view: ElementView::new(width, height),
			element,
		}
	}

	/// Builder: sets the parent container's layout parameters for this element.
	pub fn with_layout(mut self, layout: impl LayoutOffset + 'static) -> Self {
		self.view.layout = Some(Box::new(layout));
		self.view.layout_requested = true;
		self
	}

	/// Builder: sets the parent container's top-left corner on screen.
	pub fn with_parent_origin(mut self, origin: Point) -> Self {
		self.view.parent_origin = origin;
		self
	}

	/// The rendered content.
	pub fn content(&self) -> &C {
		&self.content
	}

	/// Mutable access to the rendered content.
	pub fn content_mut(&mut self) -> &mut C {
		&mut self.content
	}

	/// The controller.
	pub fn element(&self) -> &HideShowDragElement {
		&self.element
	}

	/// Mutable access to the controller for configuration.
	pub fn element_mut(&mut self) -> &mut HideShowDragElement {
		&mut self.element
	}

	/// The view state.
	pub fn view(&self) -> &ElementView {
		&self.view
	}

	/// Returns true if the element is part of the render tree.
	pub fn is_present(&self) -> bool {
		self.view.present
	}

	/// Live top-left corner on screen.
	pub fn screen_location(&self) -> Point {
		self.view.screen_location()
	}

	/// Returns true if the element asked to be laid out again.
	pub fn needs_layout(&self) -> bool {
		self.view.layout_requested
	}

	/// Runs a layout pass: places the element at its layout offset and
	/// reports the resulting bounds to the controller.
	pub fn layout(&mut self) {
		self.view.place();
		self.view.layout_requested = false;
		let frame = self.view.frame;
		self.element.on_layout(frame.left(), frame.top(), frame.right(), frame.bottom());
	}

	/// Routes a pointer event to the controller, laying out again if it moved the element.
	///
	/// An element removed from the render tree receives no events.
	pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
		if !self.view.present {
			return false;
		}
		let consumed = self.element.on_pointer_event(event, &mut self.view);
		if self.view.layout_requested {
			self.layout();
		}
		consumed
	}

	/// See [`HideShowDragElement::show`].
	pub fn show(&mut self, scheduler: &mut dyn AnimationScheduler) {
		self.element.show(&mut self.view, scheduler);
	}

	/// See [`HideShowDragElement::hide`].
	pub fn hide(&mut self, scheduler: &mut dyn AnimationScheduler) {
		self.element.hide(&mut self.view, scheduler);
	}

	/// See [`HideShowDragElement::toggle`].
	pub fn toggle(&mut self, scheduler: &mut dyn AnimationScheduler) {
		self.element.toggle(&mut self.view, scheduler);
	}

	/// See [`HideShowDragElement::set_position`].
	pub fn set_position(&mut self, x: f32, y: f32) {
		self.element.set_position(x, y, &self.view);
	}

	/// Applies one animation frame to the position property.
	///
	/// Returns false, changing nothing, for frames of a transition this
	/// element is not waiting on.
	pub fn apply_animation_frame(&mut self, frame: Frame) -> bool {
		if !self.element.is_waiting_on(frame.owner) {
			return false;
		}
		self.view.set_position(frame.position);
		true
	}

	/// Routes a fired completion task to the controller.
	pub fn on_task_fired(&mut self, handle: TaskHandle) -> bool {
		self.element.on_task_fired(handle, &mut self.view)
	}

	/// Applies a [`ManualScheduler`](crate::ManualScheduler) step: the frame
	/// first, then every fired completion task.
	pub fn apply(&mut self, advance: Advance) {
		if let Some(frame) = advance.frame {
			self.apply_animation_frame(frame);
		}
		for handle in advance.fired {
			self.on_task_fired(handle);
		}
	}

	/// Cancels any in-flight completion task so it cannot fire after the
	/// container is gone.
	pub fn teardown(&mut self, scheduler: &mut dyn AnimationScheduler) {
		self.element.cancel_pending(scheduler);
	}
}

#[cfg(test)]
mod tests;
