//! Abstract geometry types for element placement.
//!
//! These types describe points, rectangles, and layout margins without
//! depending on any windowing or rendering library. Coordinates are pixels
//! with the origin at the top-left and y increasing downward.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point (x, y coordinate) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	/// The origin.
	pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

	/// Creates a new point.
	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	/// Returns true if both coordinates are finite.
	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}

	/// Linear interpolation toward `to`; `t` is not clamped.
	pub fn lerp(self, to: Self, t: f32) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
		}
	}
}

impl Add for Point {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// A rectangle with position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	/// Creates a new rectangle. Negative dimensions are clamped to zero.
	pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self {
			x,
			y,
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}

	/// Creates a rectangle from its four edges, as reported by a layout pass.
	pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
		Self::new(left, top, right - left, bottom - top)
	}

	/// Returns the top-left corner.
	pub const fn origin(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Returns true if the rectangle has zero area.
	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}

	/// Returns the left edge x coordinate.
	pub const fn left(&self) -> f32 {
		self.x
	}

	/// Returns the right edge x coordinate (exclusive).
	pub fn right(&self) -> f32 {
		self.x + self.width
	}

	/// Returns the top edge y coordinate.
	pub const fn top(&self) -> f32 {
		self.y
	}

	/// Returns the bottom edge y coordinate (exclusive).
	pub fn bottom(&self) -> f32 {
		self.y + self.height
	}

	/// Returns true if `point` lies inside the rectangle.
	///
	/// The origin is inclusive; the right and bottom edges are exclusive.
	pub fn contains(&self, point: Point) -> bool {
		point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
	}

	/// Returns a copy moved so its origin is `origin`.
	pub fn with_origin(self, origin: Point) -> Self {
		Self { x: origin.x, y: origin.y, ..self }
	}
}

/// Layout margins in whole pixels (left, top, right, bottom).
///
/// Containers position a child by its margins; the controller only ever
/// writes left/top and clears the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Margins {
	pub left: i32,
	pub top: i32,
	pub right: i32,
	pub bottom: i32,
}

impl Margins {
	/// Creates margins from all four edges.
	pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
		Self {
			left,
			top,
			right,
			bottom,
		}
	}

	/// Margins placing a child at `(left, top)` with right/bottom cleared.
	pub const fn top_left(left: i32, top: i32) -> Self {
		Self::new(left, top, 0, 0)
	}

	/// Margins placing a child at `point`, truncating toward zero.
	pub fn from_point(point: Point) -> Self {
		Self::top_left(point.x as i32, point.y as i32)
	}

	/// Returns the left/top corner as a point.
	pub fn offset(&self) -> Point {
		Point::new(self.left as f32, self.top as f32)
	}
}
