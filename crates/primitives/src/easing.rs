//! Easing curves for timed transitions.
//!
//! An easing maps linear progress `t` in `[0, 1]` to eased progress. The
//! [`Interpolator`] catalogue covers the curves configurable from files; any
//! `Fn(f32) -> f32` can be used where a custom curve is needed.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Maps linear progress to eased progress.
pub trait Easing {
	/// Returns eased progress for linear progress `t`.
	///
	/// Callers pass `t` in `[0, 1]`; implementations should return 0 at 0
	/// and 1 at 1.
	fn ease(&self, t: f32) -> f32;
}

impl<F> Easing for F
where
	F: Fn(f32) -> f32,
{
	fn ease(&self, t: f32) -> f32 {
		self(t)
	}
}

/// Built-in easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Interpolator {
	/// Constant rate.
	Linear,
	/// Starts slow and speeds up; `factor` controls the curvature.
	Accelerate {
		/// Curvature; 1.0 yields a quadratic curve.
		factor: f32,
	},
	/// Starts fast and slows down; `factor` controls the curvature.
	Decelerate {
		/// Curvature; 1.0 yields an inverted quadratic curve.
		factor: f32,
	},
	/// Starts and ends slowly, fastest in the middle.
	AccelerateDecelerate,
}

impl Interpolator {
	/// Deceleration factor used when nothing else is configured.
	pub const DEFAULT_FACTOR: f32 = 0.5;

	/// Returns the curvature factor, if this curve has one.
	pub fn factor(&self) -> Option<f32> {
		match self {
			Self::Accelerate { factor } | Self::Decelerate { factor } => Some(*factor),
			Self::Linear | Self::AccelerateDecelerate => None,
		}
	}
}

impl Default for Interpolator {
	fn default() -> Self {
		Self::Decelerate {
			factor: Self::DEFAULT_FACTOR,
		}
	}
}

impl Easing for Interpolator {
	fn ease(&self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		match *self {
			Self::Linear => t,
			Self::Accelerate { factor } if factor == 1.0 => t * t,
			Self::Accelerate { factor } => t.powf(2.0 * factor),
			Self::Decelerate { factor } if factor == 1.0 => 1.0 - (1.0 - t) * (1.0 - t),
			Self::Decelerate { factor } => 1.0 - (1.0 - t).powf(2.0 * factor),
			Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
		}
	}
}
