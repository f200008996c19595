//! Lifecycle notifications.

use std::fmt;
use std::rc::{Rc, Weak};

/// Identifies an element in listener callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "element#{}", self.0)
	}
}

/// Receives show/hide completion and drag notifications.
///
/// Callbacks run synchronously on the UI thread inside the triggering call.
/// Coordinates are the destination (show/hide) or the resolved drag position.
pub trait HideShowDragListener {
	/// The show transition finished at `(x, y)`.
	fn on_show(&self, _element: ElementId, _x: f32, _y: f32) {}
	/// The hide transition finished at `(x, y)`.
	fn on_hide(&self, _element: ElementId, _x: f32, _y: f32) {}
	/// A drag started with the element's layout offset at `(start_x, start_y)`.
	fn on_drag_start(&self, _element: ElementId, _start_x: f32, _start_y: f32) {}
	/// The element was dropped at `(stop_x, stop_y)`.
	fn on_drag_finished(&self, _element: ElementId, _stop_x: f32, _stop_y: f32) {}
}

/// Single weak listener slot. Setting a listener replaces the previous one.
#[derive(Default)]
pub(crate) struct ListenerSlot(Option<Weak<dyn HideShowDragListener>>);

impl ListenerSlot {
	pub(crate) fn set<L: HideShowDragListener + 'static>(&mut self, listener: &Rc<L>) {
		let weak: Weak<L> = Rc::downgrade(listener);
		self.0 = Some(weak);
	}

	pub(crate) fn clear(&mut self) {
		self.0 = None;
	}

	pub(crate) fn is_set(&self) -> bool {
		self.0.as_ref().is_some_and(|weak| weak.strong_count() > 0)
	}

	/// Invokes `f` if a listener is registered and still alive.
	pub(crate) fn notify(&self, f: impl FnOnce(&dyn HideShowDragListener)) {
		if let Some(listener) = self.0.as_ref().and_then(Weak::upgrade) {
			f(listener.as_ref());
		}
	}
}

impl fmt::Debug for ListenerSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ListenerSlot").field(&self.is_set()).finish()
	}
}
