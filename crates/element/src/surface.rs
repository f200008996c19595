//! The platform view the controller drives.

use hideshow_primitives::Point;

use crate::layout::LayoutOffset;

/// Rendering-side handle on the controlled element.
///
/// Implemented by whatever renders the element; [`DragContainer`](crate::DragContainer)
/// provides one for hosts without their own view tree.
pub trait Surface {
	/// Adds the element to, or removes it from, the render tree.
	fn set_present(&mut self, present: bool);

	/// Returns true if the element is part of the render tree.
	fn is_present(&self) -> bool;

	/// The animated position property, relative to the parent container.
	fn position(&self) -> Point;

	/// Live top-left corner on screen.
	fn screen_location(&self) -> Point;

	/// Current height in pixels.
	fn height(&self) -> f32;

	/// Layout parameters of the parent container kind, if it is one the
	/// controller can reposition.
	fn layout_offset(&mut self) -> Option<&mut dyn LayoutOffset>;

	/// Asks the container to lay the element out again after its offset changed.
	fn request_layout(&mut self);
}
