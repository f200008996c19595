//! File-backed element configuration.
//!
//! Configuration is written in TOML. Every key is optional and falls back to
//! the controller defaults:
//!
//! ```toml
//! hide-show-duration-ms = 500
//! make-invisible-on-hide = true
//! drag-enabled = true
//! start-shown = true
//! show-interpolator = { kind = "decelerate", factor = 0.5 }
//! hide-interpolator = { kind = "linear" }
//!
//! # Optional. Equivalent to calling `set_positions`.
//! [positions]
//! show = { x = 10.0, y = 20.0 }
//! hide = { x = 30.0, y = 40.0 }
//! ```

use std::path::Path;
use std::time::Duration;

use hideshow_primitives::{Interpolator, Point};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default duration of a show or hide transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Explicit show/hide destinations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PositionsConfig {
	/// Destination of the show transition.
	pub show: Point,
	/// Destination of the hide transition.
	pub hide: Point,
}

/// Settings applied to a [`HideShowDragElement`](crate::HideShowDragElement) at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ElementConfig {
	/// Duration of show and hide transitions, in milliseconds.
	pub hide_show_duration_ms: u64,
	/// Remove the element from the render tree once hidden.
	pub make_invisible_on_hide: bool,
	/// Whether pointer drags move the element.
	pub drag_enabled: bool,
	/// Initial steady state.
	pub start_shown: bool,
	/// Easing for the show transition.
	pub show_interpolator: Interpolator,
	/// Easing for the hide transition.
	pub hide_interpolator: Interpolator,
	/// Explicit destinations; when absent they are seeded by the first layout pass.
	pub positions: Option<PositionsConfig>,
}

impl Default for ElementConfig {
	fn default() -> Self {
		Self {
			hide_show_duration_ms: DEFAULT_DURATION.as_millis() as u64,
			make_invisible_on_hide: true,
			drag_enabled: true,
			start_shown: true,
			show_interpolator: Interpolator::default(),
			hide_interpolator: Interpolator::default(),
			positions: None,
		}
	}
}

impl ElementConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses, and validates a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	/// Checks values that deserialize cleanly but cannot drive a transition.
	pub fn validate(&self) -> Result<()> {
		validate_interpolator("show-interpolator", &self.show_interpolator)?;
		validate_interpolator("hide-interpolator", &self.hide_interpolator)?;

		if let Some(positions) = &self.positions {
			if !positions.show.is_finite() {
				return Err(ConfigError::InvalidPosition { field: "positions.show" });
			}
			if !positions.hide.is_finite() {
				return Err(ConfigError::InvalidPosition { field: "positions.hide" });
			}
		}

		Ok(())
	}

	/// Transition duration as a [`Duration`].
	pub fn hide_show_duration(&self) -> Duration {
		Duration::from_millis(self.hide_show_duration_ms)
	}
}

fn validate_interpolator(field: &'static str, curve: &Interpolator) -> Result<()> {
	match curve.factor() {
		Some(factor) if !factor.is_finite() || factor <= 0.0 => Err(ConfigError::InvalidInterpolator { field, factor }),
		_ => Ok(()),
	}
}
