//! Single-pointer drag protocol.
//!
//! Pointer-down captures the distance between the pointer and the element's
//! layout offset, pointer-move rewrites the offset so that distance is kept,
//! and pointer-up stores the live position as the destination of the current
//! steady state.

use hideshow_primitives::{Point, PointerEvent, PointerPhase};

use super::HideShowDragElement;
use crate::surface::Surface;

impl HideShowDragElement {
	/// Handles a pointer event, returning whether it was consumed.
	///
	/// Every phase is consumed while dragging is enabled, including when the
	/// parent container kind cannot be repositioned. Nothing is consumed or
	/// changed while dragging is disabled.
	pub fn on_pointer_event(&mut self, event: PointerEvent, surface: &mut dyn Surface) -> bool {
		if !self.drag_enabled {
			return false;
		}

		match event.phase {
			PointerPhase::Down => self.begin_drag(event.screen, surface),
			PointerPhase::Move => self.drag_to(event.screen, surface),
			PointerPhase::Up => self.finish_drag(surface),
		}
		true
	}

	/// Returns true between a pointer-down on a repositionable element and the next pointer-up.
	pub fn is_dragging(&self) -> bool {
		self.drag_anchor.is_some()
	}

	fn begin_drag(&mut self, pointer: Point, surface: &mut dyn Surface) {
		let Some(params) = surface.layout_offset() else {
			tracing::trace!(element = %self.id, "container kind not repositionable, drag offsets skipped");
			self.drag_anchor = None;
			return;
		};

		let start = params.offset();
		self.drag_anchor = Some(pointer - start);
		tracing::trace!(element = %self.id, x = start.x, y = start.y, "drag started");
		self.listener.notify(|listener| listener.on_drag_start(self.id, start.x, start.y));
	}

	fn drag_to(&mut self, pointer: Point, surface: &mut dyn Surface) {
		let Some(anchor) = self.drag_anchor else {
			return;
		};
		let Some(params) = surface.layout_offset() else {
			return;
		};

		params.set_offset(pointer - anchor);
		surface.request_layout();
	}

	fn finish_drag(&mut self, surface: &mut dyn Surface) {
		self.drag_anchor = None;

		let resolved = self.resolved_location(surface);
		if self.shown {
			self.destinations.show = resolved;
		} else {
			self.destinations.hide = resolved;
		}

		tracing::trace!(element = %self.id, x = resolved.x, y = resolved.y, shown = self.shown, "drag finished");
		self.listener.notify(|listener| listener.on_drag_finished(self.id, resolved.x, resolved.y));
	}
}
