//! Container layout adapters.
//!
//! A container positions its children through layout parameters whose shape
//! depends on the container kind. The controller only needs to read and write
//! the top-left offset, so each supported kind implements [`LayoutOffset`].

use hideshow_primitives::{Margins, Point};

/// Read/write access to the top-left offset of a child within its container.
pub trait LayoutOffset {
	/// Returns the current left/top offset.
	fn offset(&self) -> Point;

	/// Moves the child to `offset`, truncating to whole pixels and clearing
	/// the right/bottom margins.
	fn set_offset(&mut self, offset: Point);

	/// Returns the full margin set.
	fn margins(&self) -> Margins;
}

/// Parameters for a container that places children purely by margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbsoluteLayoutParams {
	pub margins: Margins,
}

impl AbsoluteLayoutParams {
	/// Places the child at `(left, top)`.
	pub const fn at(left: i32, top: i32) -> Self {
		Self {
			margins: Margins::top_left(left, top),
		}
	}
}

impl LayoutOffset for AbsoluteLayoutParams {
	fn offset(&self) -> Point {
		self.margins.offset()
	}

	fn set_offset(&mut self, offset: Point) {
		self.margins = Margins::from_point(offset);
	}

	fn margins(&self) -> Margins {
		self.margins
	}
}

/// Anchor rules of a constraint-based container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
	/// Align the child's left edge with the parent's.
	AlignParentLeft,
	/// Align the child's top edge with the parent's.
	AlignParentTop,
	/// Center the child horizontally.
	CenterHorizontal,
	/// Center the child vertically.
	CenterVertical,
}

/// Parameters for a container that places children by constraints plus margins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeLayoutParams {
	pub margins: Margins,
	/// Constraints applied before margins.
	pub anchors: Vec<Anchor>,
}

impl RelativeLayoutParams {
	/// Anchors the child to the parent's top-left corner at `(left, top)`.
	pub fn at(left: i32, top: i32) -> Self {
		Self {
			margins: Margins::top_left(left, top),
			anchors: vec![Anchor::AlignParentLeft, Anchor::AlignParentTop],
		}
	}
}

impl LayoutOffset for RelativeLayoutParams {
	fn offset(&self) -> Point {
		self.margins.offset()
	}

	fn set_offset(&mut self, offset: Point) {
		self.margins = Margins::from_point(offset);
	}

	fn margins(&self) -> Margins {
		self.margins
	}
}

/// Parameters for a container that stacks children along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearLayoutParams {
	pub margins: Margins,
	/// Share of leftover space along the stacking axis.
	pub weight: f32,
}

impl LinearLayoutParams {
	/// Offsets the child by `(left, top)` from its stack slot.
	pub const fn at(left: i32, top: i32) -> Self {
		Self {
			margins: Margins::top_left(left, top),
			weight: 0.0,
		}
	}
}

impl LayoutOffset for LinearLayoutParams {
	fn offset(&self) -> Point {
		self.margins.offset()
	}

	fn set_offset(&mut self, offset: Point) {
		self.margins = Margins::from_point(offset);
	}

	fn margins(&self) -> Margins {
		self.margins
	}
}

#[cfg(test)]
mod tests;
