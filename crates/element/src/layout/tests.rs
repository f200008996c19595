use hideshow_primitives::{Margins, Point};

use super::{AbsoluteLayoutParams, Anchor, LayoutOffset, LinearLayoutParams, RelativeLayoutParams};

fn exercise(params: &mut dyn LayoutOffset) {
	assert_eq!(params.offset(), Point::new(5.0, 7.0));

	params.set_offset(Point::new(42.8, -1.5));
	assert_eq!(params.offset(), Point::new(42.0, -1.0));
	assert_eq!(params.margins(), Margins::top_left(42, -1));
}

#[test]
fn every_container_kind_exposes_the_same_offset() {
	exercise(&mut AbsoluteLayoutParams::at(5, 7));
	exercise(&mut RelativeLayoutParams::at(5, 7));
	exercise(&mut LinearLayoutParams::at(5, 7));
}

#[test]
fn set_offset_clears_right_and_bottom_margins() {
	let mut params = AbsoluteLayoutParams {
		margins: Margins::new(1, 2, 30, 40),
	};
	params.set_offset(Point::new(3.0, 4.0));
	assert_eq!(params.margins, Margins::new(3, 4, 0, 0));
}

#[test]
fn set_offset_keeps_kind_specific_fields() {
	let mut relative = RelativeLayoutParams::at(0, 0);
	relative.set_offset(Point::new(9.0, 9.0));
	assert_eq!(relative.anchors, vec![Anchor::AlignParentLeft, Anchor::AlignParentTop]);

	let mut linear = LinearLayoutParams { weight: 1.0, ..LinearLayoutParams::at(0, 0) };
	linear.set_offset(Point::new(9.0, 9.0));
	assert_eq!(linear.weight, 1.0);
}
