//! Frame-rate independent scroll physics.
//!
//! For a controller that drives these models from a frame clock and keeps a host scroll view
//! in sync, see the `smooth-scroll` crate.
//!
//! A model turns discrete scroll input (wheel notches, trackpad/touch deltas) into a continuous
//! offset trajectory along one axis. It holds no timers and does no I/O: the caller feeds it
//! impulses via [`ScrollPhysics::on_scroll`] and advances it once per frame via
//! [`ScrollPhysics::update`].
//!
//! Available models:
//! - [`VelocityPhysics`]: momentum with friction decay (wheel "fling").
//! - [`LerpPhysics`]: position-seeking interpolation to an absolute target.
//! - [`ExponentialPhysics`]: exponential decay of the remaining distance.
//! - [`HybridPhysics`]: lerp for precise input, momentum for coarse input.
//!
//! Sign convention: a positive `delta` (wheel up) moves the offset towards `min`.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod exponential;
mod hybrid;
mod lerp;
mod options;
mod physics;
mod types;
mod velocity;

#[cfg(test)]
mod tests;

pub use exponential::ExponentialPhysics;
pub use hybrid::{HybridPhysics, MotionMode};
pub use lerp::LerpPhysics;
pub use options::{
    ExponentialOptions, HybridOptions, LerpOptions, MAX_FRICTION, MIN_FRICTION, VelocityOptions,
};
pub use physics::{REFERENCE_FRAME_SECS, ScrollPhysics};
pub use types::{ScrollBounds, ScrollImpulse};
pub use velocity::VelocityPhysics;
