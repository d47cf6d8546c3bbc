//! A headless smooth-scrolling controller for document viewports.
//!
//! Instead of letting discrete wheel ticks and anchor jumps move the viewport
//! in hard steps, [`SmoothScroll`] tracks a `target` offset and eases the
//! committed `current` offset toward it every frame with an exponential
//! ease-out. Whether the effect is active at all is decided by a small mode
//! policy over viewport and content size (short pages and narrow viewports
//! keep native scrolling).
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport width/height and content height
//! - the observed scroll offset for resynchronization events
//! - a frame clock that calls [`SmoothScroll::tick`] while animating
//!
//! In return, handlers report whether the host's default action must be
//! suppressed ([`InputResponse`]), and `tick()` yields the pixel offset to
//! commit through the host's lowest-level scroll primitive.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod options;
mod policy;
mod state;
mod types;


pub use anchor::{AnchorTargets, fragment_name};
pub use controller::SmoothScroll;
pub use options::{OnChangeCallback, SmoothScrollOptions};
pub use policy::decide;
pub use state::ScrollState;
pub use types::{InputResponse, InteractionSource, Modifiers, NavKey, Viewport, WheelDeltaMode};
