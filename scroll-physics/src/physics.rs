use core::fmt;

use crate::{ScrollBounds, ScrollImpulse};

/// The frame time the decay constants are tuned for.
///
/// Models raise their per-frame factors to the power of `dt / REFERENCE_FRAME_SECS`, so the
/// trajectory over a given wall-clock time does not depend on the display refresh rate.
pub const REFERENCE_FRAME_SECS: f64 = 1.0 / 144.0;

/// A stateful motion model for one scroll axis.
///
/// Contract:
/// - `on_scroll` marks the model unstable (unless the impulse is empty). Impulses received before
///   the model settles accumulate; they never overwrite each other.
/// - `update` advances the model by `dt` seconds and returns the next offset, clamped to `bounds`.
///   A stable model returns `current_offset` unchanged. `dt == 0` is a no-op.
/// - On the stabilizing frame the model snaps exactly to its resting value.
pub trait ScrollPhysics: fmt::Debug {
    fn on_scroll(&mut self, impulse: ScrollImpulse);

    fn update(&mut self, current_offset: f64, dt: f64, bounds: ScrollBounds) -> f64;

    fn is_stable(&self) -> bool;

    /// Whether the model currently uses its precise-input (touch/trackpad) constants.
    fn is_precise_mode(&self) -> bool {
        false
    }

    fn set_precise_mode(&mut self, _precise: bool) {}

    /// Drops all transient motion state; the model becomes stable. Tunables are kept.
    fn reset(&mut self);

    /// Returns an independent model with the same tunables and no motion state.
    ///
    /// Precise mode counts as motion state: the copy starts in coarse mode.
    fn clone_fresh(&self) -> Box<dyn ScrollPhysics>;
}

/// Non-finite and negative frame times are treated as "no time passed".
pub(crate) fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Clamps a tunable into `[min, max]`, falling back to `fallback` for NaN.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn clamp_param(name: &'static str, value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        pwarn!(option = name, fallback, "option is NaN; using fallback");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        pwarn!(option = name, value, clamped, "option out of range; clamped");
    }
    clamped
}
