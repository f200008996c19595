//! Non-client screen region and full-screen queries.

use std::cell::Cell;

bitflags::bitflags! {
	/// Display flags of the host window.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct WindowFlags: u32 {
		/// The window hides the status bar and covers the whole screen.
		const FULLSCREEN = 1 << 10;
	}
}

/// Window queries used to correct live vertical positions.
pub trait ScreenInsets {
	/// Returns true if the host window is in full-screen mode.
	fn is_full_screen(&self) -> bool;

	/// Height in pixels of the platform's reserved strip (status bar),
	/// regardless of full-screen mode.
	fn non_client_height(&self) -> f32;

	/// Height of the reserved strip as seen by content: zero in full-screen mode.
	fn status_bar_height(&self) -> f32 {
		if self.is_full_screen() { 0.0 } else { self.non_client_height() }
	}
}

/// [`ScreenInsets`] backed by window flags the host can update in place.
#[derive(Debug, Default)]
pub struct WindowInsets {
	flags: Cell<WindowFlags>,
	status_bar_height: f32,
}

impl WindowInsets {
	/// Creates insets for a window with the given flags and status bar height.
	pub fn new(flags: WindowFlags, status_bar_height: f32) -> Self {
		Self {
			flags: Cell::new(flags),
			status_bar_height,
		}
	}

	/// Returns the current window flags.
	pub fn flags(&self) -> WindowFlags {
		self.flags.get()
	}

	/// Replaces the window flags.
	pub fn set_flags(&self, flags: WindowFlags) {
		self.flags.set(flags);
	}
}

impl ScreenInsets for WindowInsets {
	fn is_full_screen(&self) -> bool {
		self.flags.get().contains(WindowFlags::FULLSCREEN)
	}

	fn non_client_height(&self) -> f32 {
		self.status_bar_height
	}
}

#[cfg(test)]
mod tests;
