//! Error types for element configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an element configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An easing curve factor is not a positive finite number.
	#[error("invalid interpolator factor for '{field}': {factor} (expected a positive finite number)")]
	InvalidInterpolator {
		/// The config key holding the curve.
		field: &'static str,
		/// The rejected factor.
		factor: f32,
	},

	/// A destination coordinate is NaN or infinite.
	#[error("invalid position for '{field}': coordinates must be finite")]
	InvalidPosition {
		/// The config key holding the coordinate pair.
		field: &'static str,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
