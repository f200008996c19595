//! Show/hide state machine for a draggable element.
//!
//! [`HideShowDragElement`] tracks whether its element is shown, where the
//! show and hide transitions go, and whether a transition is in flight. It
//! owns no platform resources: every operation that touches the view or the
//! clock takes a [`Surface`] and, where needed, an [`AnimationScheduler`].
//!
//! # Transitions
//!
//! ```text
//! Hidden --show()--> Showing --(duration)--> Shown
//! Shown  --hide()--> Hiding  --(duration)--> Hidden
//! ```
//!
//! A transition settles when the scheduler fires the completion task
//! scheduled for exactly the configured duration, not when the animator
//! reports that the position animation finished. While a transition is in
//! flight, further `show`/`hide` calls are dropped.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use hideshow_primitives::{Easing, Interpolator, Point};

use crate::config::{DEFAULT_DURATION, ElementConfig};
use crate::insets::ScreenInsets;
use crate::listener::{ElementId, HideShowDragListener, ListenerSlot};
use crate::scheduler::{AnimationScheduler, TaskHandle, Transition};
use crate::surface::Surface;

mod drag;

/// Visibility phase of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
	/// Resting at the hide destination.
	Hidden,
	/// Resting at the show destination.
	Shown,
	/// Moving toward the show destination.
	Showing,
	/// Moving toward the hide destination.
	Hiding,
}

impl Visibility {
	/// Returns true for `Hidden` and `Shown`.
	pub fn is_steady(self) -> bool {
		matches!(self, Self::Hidden | Self::Shown)
	}
}

/// Screen-space destinations of the show and hide transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Destinations {
	pub show: Point,
	pub hide: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionKind {
	Show,
	Hide,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
	kind: TransitionKind,
	handle: TaskHandle,
}

/// Controller for an element that animates between a shown and a hidden
/// position and can be dragged by a single pointer.
pub struct HideShowDragElement {
	id: ElementId,
	/// Steady-state visibility; unchanged while a transition is in flight.
	shown: bool,
	/// In-flight transition. `Some` exactly while animating.
	pending: Option<PendingTransition>,
	/// Set by the first layout pass or by explicit positions.
	measured: bool,
	destinations: Destinations,
	duration: Duration,
	make_invisible_on_hide: bool,
	drag_enabled: bool,
	show_interpolator: Rc<dyn Easing>,
	hide_interpolator: Rc<dyn Easing>,
	/// Pointer minus layout offset, captured on pointer-down.
	drag_anchor: Option<Point>,
	insets: Rc<dyn ScreenInsets>,
	/// Resolved once at construction.
	status_bar_height: f32,
	listener: ListenerSlot,
}

impl HideShowDragElement {
	/// Creates a shown element with default settings.
	pub fn new(id: ElementId, insets: Rc<dyn ScreenInsets>) -> Self {
		let status_bar_height = insets.status_bar_height();
		tracing::info!(element = %id, status_bar_height, "element initialized");

		Self {
			id,
			shown: true,
			pending: None,
			measured: false,
			destinations: Destinations::default(),
			duration: DEFAULT_DURATION,
			make_invisible_on_hide: true,
			drag_enabled: true,
			show_interpolator: Rc::new(Interpolator::default()),
			hide_interpolator: Rc::new(Interpolator::default()),
			drag_anchor: None,
			insets,
			status_bar_height,
			listener: ListenerSlot::default(),
		}
	}

	/// Creates an element from a validated configuration.
	pub fn from_config(id: ElementId, config: &ElementConfig, insets: Rc<dyn ScreenInsets>) -> Self {
		let mut element = Self::new(id, insets);
		element.shown = config.start_shown;
		element.duration = config.hide_show_duration();
		element.make_invisible_on_hide = config.make_invisible_on_hide;
		element.drag_enabled = config.drag_enabled;
		element.show_interpolator = Rc::new(config.show_interpolator);
		element.hide_interpolator = Rc::new(config.hide_interpolator);
		if let Some(positions) = config.positions {
			element.set_positions(positions.show.x, positions.show.y, positions.hide.x, positions.hide.y);
		}
		element
	}

	/// Identifier passed to listener callbacks.
	pub fn id(&self) -> ElementId {
		self.id
	}

	/// Starts the show transition if the element is hidden and not animating.
	pub fn show(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn AnimationScheduler) {
		if self.shown || self.is_animating() {
			tracing::trace!(element = %self.id, visibility = ?self.visibility(), "show ignored");
			return;
		}

		surface.set_present(true);
		let to = self.destinations.show;
		tracing::debug!(element = %self.id, x = to.x, y = to.y, "showing");
		let easing = Rc::clone(&self.show_interpolator);
		self.start_transition(TransitionKind::Show, to, easing, surface, scheduler);
	}

	/// Starts the hide transition if the element is shown and not animating.
	pub fn hide(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn AnimationScheduler) {
		if !self.shown || self.is_animating() {
			tracing::trace!(element = %self.id, visibility = ?self.visibility(), "hide ignored");
			return;
		}

		let to = self.destinations.hide;
		tracing::debug!(element = %self.id, x = to.x, y = to.y, "hiding");
		let easing = Rc::clone(&self.hide_interpolator);
		self.start_transition(TransitionKind::Hide, to, easing, surface, scheduler);
	}

	/// Hides a shown element, shows a hidden one.
	pub fn toggle(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn AnimationScheduler) {
		if self.shown {
			self.hide(surface, scheduler);
		} else {
			self.show(surface, scheduler);
		}
	}

	fn start_transition(
		&mut self,
		kind: TransitionKind,
		to: Point,
		easing: Rc<dyn Easing>,
		surface: &dyn Surface,
		scheduler: &mut dyn AnimationScheduler,
	) {
		let handle = scheduler.schedule(self.duration);
		scheduler.animate(Transition {
			owner: handle,
			from: surface.position(),
			to,
			duration: self.duration,
			easing,
		});
		self.pending = Some(PendingTransition { kind, handle });
	}

	/// Settles the in-flight transition whose completion task is `handle`.
	///
	/// Returns false, changing nothing, for handles this element is not
	/// waiting on (already settled, cancelled, or belonging to another element).
	pub fn on_task_fired(&mut self, handle: TaskHandle, surface: &mut dyn Surface) -> bool {
		let Some(pending) = self.pending.filter(|pending| pending.handle == handle) else {
			tracing::trace!(element = %self.id, ?handle, "stale completion ignored");
			return false;
		};
		self.pending = None;

		match pending.kind {
			TransitionKind::Show => {
				self.shown = true;
				let Point { x, y } = self.destinations.show;
				self.listener.notify(|listener| listener.on_show(self.id, x, y));
			}
			TransitionKind::Hide => {
				if self.make_invisible_on_hide {
					surface.set_present(false);
				}
				self.shown = false;
				let Point { x, y } = self.destinations.hide;
				self.listener.notify(|listener| listener.on_hide(self.id, x, y));
			}
		}
		true
	}

	/// Cancels the completion task of an in-flight transition, leaving the
	/// element in its previous steady state. Call before discarding the element.
	pub fn cancel_pending(&mut self, scheduler: &mut dyn AnimationScheduler) {
		if let Some(pending) = self.pending.take() {
			tracing::trace!(element = %self.id, handle = ?pending.handle, "pending transition cancelled");
			scheduler.cancel(pending.handle);
		}
	}

	/// Returns true if the element rests in, or last settled in, the shown state.
	pub fn is_shown(&self) -> bool {
		self.shown
	}

	/// Overrides the steady state without animating or notifying.
	pub fn set_is_shown(&mut self, shown: bool) {
		self.shown = shown;
	}

	/// Returns true while a show or hide transition is in flight.
	pub fn is_animating(&self) -> bool {
		self.pending.is_some()
	}

	/// Returns true if `handle` is the completion task of the transition in flight.
	pub fn is_waiting_on(&self, handle: TaskHandle) -> bool {
		self.pending.is_some_and(|pending| pending.handle == handle)
	}

	/// Returns the current visibility phase.
	pub fn visibility(&self) -> Visibility {
		match (self.shown, self.pending.map(|pending| pending.kind)) {
			(_, Some(TransitionKind::Show)) => Visibility::Showing,
			(_, Some(TransitionKind::Hide)) => Visibility::Hiding,
			(true, None) => Visibility::Shown,
			(false, None) => Visibility::Hidden,
		}
	}

	/// Returns true if pointer drags move the element.
	pub fn is_draggable(&self) -> bool {
		self.drag_enabled
	}

	/// Enables or disables dragging.
	pub fn set_drag_enabled(&mut self, enabled: bool) {
		self.drag_enabled = enabled;
		if !enabled {
			self.drag_anchor = None;
		}
	}

	/// Returns true once destinations were seeded by layout or set explicitly.
	pub fn is_measured(&self) -> bool {
		self.measured
	}

	/// Current show and hide destinations.
	pub fn destinations(&self) -> Destinations {
		self.destinations
	}

	/// Overwrites both destinations and suppresses first-layout seeding.
	pub fn set_positions(&mut self, show_x: f32, show_y: f32, hide_x: f32, hide_y: f32) {
		self.destinations = Destinations {
			show: Point::new(show_x, show_y),
			hide: Point::new(hide_x, hide_y),
		};
		self.measured = true;
	}

	/// Sets the destination of the opposite state to `(x, y)` and the
	/// destination of the current state to the element's live position.
	pub fn set_position(&mut self, x: f32, y: f32, surface: &dyn Surface) {
		let live = self.resolved_location(surface);
		let target = Point::new(x, y);

		if self.shown {
			self.destinations.hide = target;
			self.destinations.show = live;
		} else {
			self.destinations.show = target;
			self.destinations.hide = live;
		}

		tracing::debug!(
			element = %self.id,
			show = ?self.destinations.show,
			hide = ?self.destinations.hide,
			shown = self.shown,
			"set position"
		);
	}

	/// Duration of show and hide transitions.
	pub fn hide_show_duration(&self) -> Duration {
		self.duration
	}

	/// Sets the duration of show and hide transitions. Applies to the next transition.
	pub fn set_hide_show_duration(&mut self, duration: Duration) {
		self.duration = duration;
	}

	/// Whether a completed hide removes the element from the render tree.
	pub fn makes_invisible_on_hide(&self) -> bool {
		self.make_invisible_on_hide
	}

	/// Sets whether a completed hide removes the element from the render tree.
	pub fn make_invisible_on_hide(&mut self, enabled: bool) {
		self.make_invisible_on_hide = enabled;
	}

	/// Sets the easing of the show transition.
	pub fn set_show_interpolator(&mut self, easing: impl Easing + 'static) {
		self.show_interpolator = Rc::new(easing);
	}

	/// Sets the easing of the hide transition.
	pub fn set_hide_interpolator(&mut self, easing: impl Easing + 'static) {
		self.hide_interpolator = Rc::new(easing);
	}

	/// Registers the listener, replacing any previous one.
	///
	/// Only a weak reference is kept; dropping the listener unregisters it.
	pub fn set_hide_show_listener<L: HideShowDragListener + 'static>(&mut self, listener: &Rc<L>) {
		self.listener.set(listener);
	}

	/// Removes the registered listener.
	pub fn clear_hide_show_listener(&mut self) {
		self.listener.clear();
	}

	/// Returns true if the host window is currently full-screen.
	pub fn is_full_screen(&self) -> bool {
		self.insets.is_full_screen()
	}

	/// Status bar height resolved at construction; zero if the window was full-screen.
	pub fn status_bar_height(&self) -> f32 {
		self.status_bar_height
	}

	/// Layout callback. Only the first pass seeds the current state's
	/// destination, and only if no positions were set before it.
	pub fn on_layout(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
		if self.measured {
			return;
		}
		self.measured = true;
		tracing::debug!(element = %self.id, left, top, right, bottom, "first layout");

		let origin = Point::new(left, top);
		if self.shown {
			self.destinations.show = origin;
		} else {
			self.destinations.hide = origin;
		}
	}

	/// Live screen position, corrected for half the element height (whole
	/// pixels, rounded down) and the status bar so it matches the origin
	/// destinations are expressed in.
	pub fn resolved_location(&self, surface: &dyn Surface) -> Point {
		let location = surface.screen_location();
		let half_height = (surface.height() as i32 / 2) as f32;
		Point::new(location.x, location.y - half_height - self.status_bar_height)
	}
}

impl fmt::Debug for HideShowDragElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HideShowDragElement")
			.field("id", &self.id)
			.field("visibility", &self.visibility())
			.field("measured", &self.measured)
			.field("destinations", &self.destinations)
			.field("duration", &self.duration)
			.field("make_invisible_on_hide", &self.make_invisible_on_hide)
			.field("drag_enabled", &self.drag_enabled)
			.field("status_bar_height", &self.status_bar_height)
			.field("listener", &self.listener)
			.finish_non_exhaustive()
	}
}
