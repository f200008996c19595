//! Single-pointer input events in raw screen coordinates.

use crate::geometry::Point;

/// Phase of a single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
	/// Pointer pressed.
	Down,
	/// Pointer moved while pressed.
	Move,
	/// Pointer released.
	Up,
}

/// A pointer event as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
	/// Gesture phase.
	pub phase: PointerPhase,
	/// Raw position on screen, not relative to any container.
	pub screen: Point,
}

impl PointerEvent {
	/// Creates an event for `phase` at raw screen coordinates.
	pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
		Self {
			phase,
			screen: Point::new(x, y),
		}
	}

	/// Pointer pressed at `(x, y)`.
	pub const fn down(x: f32, y: f32) -> Self {
		Self::new(PointerPhase::Down, x, y)
	}

	/// Pointer moved to `(x, y)`.
	pub const fn moved(x: f32, y: f32) -> Self {
		Self::new(PointerPhase::Move, x, y)
	}

	/// Pointer released at `(x, y)`.
	pub const fn up(x: f32, y: f32) -> Self {
		Self::new(PointerPhase::Up, x, y)
	}
}
