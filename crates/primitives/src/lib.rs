//! Value types shared by the show/hide element controller: screen-space
//! geometry, pointer events, and easing curves.

/// Easing curves for timed transitions.
pub mod easing;
/// Points, rectangles, and layout margins.
pub mod geometry;
/// Single-pointer input events.
pub mod pointer;

pub use easing::{Easing, Interpolator};
pub use geometry::{Margins, Point, Rect};
pub use pointer::{PointerEvent, PointerPhase};
