//! Controller for an element that animates between a shown and a hidden
//! position and can be repositioned by dragging.
//!
//! The crate is split along the capabilities the controller consumes:
//!
//! - [`HideShowDragElement`]: visibility state, destinations, drag protocol.
//! - [`AnimationScheduler`]: position animation and fixed-delay completion tasks.
//! - [`Surface`]: the rendered view (presence, position, layout offset).
//! - [`LayoutOffset`]: one adapter per supported parent container kind.
//! - [`ScreenInsets`]: status bar height and full-screen mode.
//! - [`HideShowDragListener`]: lifecycle notifications.
//!
//! [`DragContainer`] wires all of them together for hosts that do not bring
//! their own view tree, and [`ManualScheduler`] drives it from a simulated clock.
//!
//! Everything runs on one thread. Nothing here blocks or spawns.

/// Composition of content, view state, and controller.
pub mod container;
/// File-backed configuration.
pub mod config;
/// The show/hide/drag controller.
pub mod element;
/// Configuration errors.
pub mod error;
/// Status bar and full-screen queries.
pub mod insets;
/// Parent container layout adapters.
pub mod layout;
/// Lifecycle notifications.
pub mod listener;
/// Animation and timer capability.
pub mod scheduler;
/// Rendering-side element handle.
pub mod surface;

pub use container::{DragContainer, ElementView};
pub use config::{ElementConfig, PositionsConfig};
pub use element::{Destinations, HideShowDragElement, Visibility};
pub use error::ConfigError;
pub use hideshow_primitives::{Easing, Interpolator, Margins, Point, PointerEvent, PointerPhase, Rect};
pub use insets::{ScreenInsets, WindowFlags, WindowInsets};
pub use layout::{AbsoluteLayoutParams, Anchor, LayoutOffset, LinearLayoutParams, RelativeLayoutParams};
pub use listener::{ElementId, HideShowDragListener};
pub use scheduler::{Advance, AnimationScheduler, Frame, ManualScheduler, TaskHandle, Transition};
pub use surface::Surface;
