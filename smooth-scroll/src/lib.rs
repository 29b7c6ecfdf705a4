//! Smooth scrolling on top of the `scroll-physics` models.
//!
//! The controller bridges discrete input (wheel, trackpad, touch pan) and a host scroll view. It
//! keeps two offsets per axis:
//!
//! - the *logical* offset, which the host uses for layout and virtualization;
//! - the *visual* offset, animated every frame and rendered as a translation overlay.
//!
//! The logical offset is pushed to the host at a bounded rate while motion is in flight, so
//! expensive layout passes do not run every frame. When motion settles, the visual offset becomes
//! the new logical offset and the overlay is cleared.
//!
//! This crate holds no UI objects. Adapters implement [`ScrollHost`] and [`FrameClock`] and forward
//! input and frame ticks to [`SmoothScroller`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod axis;
mod controller;
mod host;
mod options;
mod precision;


pub use axis::{Axis, AxisSnapshot, ScrollAxes};
pub use controller::SmoothScroller;
pub use host::{FrameClock, FrameSubscription, ScrollHost};
pub use options::SmoothScrollOptions;
pub use precision::{InputClass, PrecisionDetector, WheelEvent};
