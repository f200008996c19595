//! Animation scheduling capability.
//!
//! The controller never owns a timer or an animator. It asks an
//! [`AnimationScheduler`] to interpolate the element's position and to call
//! back after a fixed delay, identified by a [`TaskHandle`]. The host routes
//! fired handles back to the controller; handles it no longer tracks are
//! ignored, so a completion that outlives its transition is harmless.
//!
//! Each [`Transition`] is tagged with its completion handle, and so is every
//! sampled [`Frame`]. Hosts sharing one scheduler between elements route a
//! frame only to the element waiting on its owner.
//!
//! [`ManualScheduler`] is a simulated-clock implementation for hosts that
//! drive frames themselves and for tests. It runs one transition at a time.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use hideshow_primitives::{Easing, Point};

/// Identifies a scheduled completion callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(pub u64);

/// An interpolated move of the element's position, x and y concurrently.
#[derive(Clone)]
pub struct Transition {
	/// Completion task of the transition; frames are tagged with it.
	pub owner: TaskHandle,
	/// Position when the transition starts.
	pub from: Point,
	/// Destination.
	pub to: Point,
	/// Total duration.
	pub duration: Duration,
	/// Easing applied to linear progress.
	pub easing: Rc<dyn Easing>,
}

impl Transition {
	/// Returns the interpolated position `elapsed` into the transition.
	pub fn sample(&self, elapsed: Duration) -> Point {
		if self.duration.is_zero() || elapsed >= self.duration {
			return self.to;
		}
		let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
		self.from.lerp(self.to, self.easing.ease(progress))
	}
}

impl fmt::Debug for Transition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Transition")
			.field("owner", &self.owner)
			.field("from", &self.from)
			.field("to", &self.to)
			.field("duration", &self.duration)
			.finish_non_exhaustive()
	}
}

/// Animation and timer services provided by the host.
pub trait AnimationScheduler {
	/// Starts animating the element's position. A new transition replaces
	/// any transition still running.
	///
	/// The element schedules the completion first, so `transition.owner`
	/// names a live task.
	fn animate(&mut self, transition: Transition);

	/// Schedules a completion callback `delay` from now.
	fn schedule(&mut self, delay: Duration) -> TaskHandle;

	/// Cancels a scheduled callback. Unknown handles are ignored.
	fn cancel(&mut self, handle: TaskHandle);
}

/// One sampled animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
	/// Completion task of the transition that produced the frame.
	pub owner: TaskHandle,
	/// Position to apply.
	pub position: Point,
}

/// Output of one [`ManualScheduler::advance`] step.
#[derive(Debug, Default, PartialEq)]
pub struct Advance {
	/// Frame to apply, if a transition was running.
	pub frame: Option<Frame>,
	/// Callbacks that came due, in due order.
	pub fired: Vec<TaskHandle>,
}

#[derive(Debug)]
struct Running {
	started_at: Duration,
	transition: Transition,
}

/// Simulated-clock scheduler.
#[derive(Debug, Default)]
pub struct ManualScheduler {
	now: Duration,
	next_handle: u64,
	timers: Vec<(Duration, TaskHandle)>,
	running: Option<Running>,
	animations_started: usize,
}

impl ManualScheduler {
	/// Creates a scheduler at time zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current simulated time.
	pub fn now(&self) -> Duration {
		self.now
	}

	/// Number of transitions started so far.
	pub fn animations_started(&self) -> usize {
		self.animations_started
	}

	/// Number of callbacks scheduled and not yet fired or cancelled.
	pub fn pending_tasks(&self) -> usize {
		self.timers.len()
	}

	/// The transition currently running, if any.
	pub fn running(&self) -> Option<&Transition> {
		self.running.as_ref().map(|running| &running.transition)
	}

	/// Moves the clock forward by `dt`, sampling the running transition and
	/// collecting every callback due at or before the new time.
	pub fn advance(&mut self, dt: Duration) -> Advance {
		self.now += dt;

		let frame = self.running.as_ref().map(|running| Frame {
			owner: running.transition.owner,
			position: running.transition.sample(self.now.saturating_sub(running.started_at)),
		});
		if self
			.running
			.as_ref()
			.is_some_and(|running| self.now >= running.started_at + running.transition.duration)
		{
			self.running = None;
		}

		let now = self.now;
		let mut due: Vec<(Duration, TaskHandle)> = Vec::new();
		self.timers.retain(|&(at, handle)| {
			if at <= now {
				due.push((at, handle));
				false
			} else {
				true
			}
		});
		due.sort();

		Advance {
			frame,
			fired: due.into_iter().map(|(_, handle)| handle).collect(),
		}
	}
}

impl AnimationScheduler for ManualScheduler {
	fn animate(&mut self, transition: Transition) {
		self.animations_started += 1;
		self.running = Some(Running {
			started_at: self.now,
			transition,
		});
	}

	fn schedule(&mut self, delay: Duration) -> TaskHandle {
		self.next_handle += 1;
		let handle = TaskHandle(self.next_handle);
		self.timers.push((self.now + delay, handle));
		handle
	}

	fn cancel(&mut self, handle: TaskHandle) {
		self.timers.retain(|&(_, pending)| pending != handle);
	}
}
