use crate::REFERENCE_FRAME_SECS;
use crate::physics::clamp_param;

/// Friction at `smoothness == 0`: stops quickly.
pub const MIN_FRICTION: f64 = 0.85;
/// Friction at `smoothness == 1`: long, floaty glide.
pub const MAX_FRICTION: f64 = 0.96;

const MIN_REFERENCE_FRAME_SECS: f64 = 1.0 / 1000.0;
const MAX_REFERENCE_FRAME_SECS: f64 = 1.0 / 10.0;

/// Configuration for [`crate::VelocityPhysics`].
///
/// Out-of-range values are clamped when the options are handed to a model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VelocityOptions {
    /// `0..=1`, mapped linearly onto friction `MIN_FRICTION..=MAX_FRICTION`.
    pub smoothness: f64,
    /// Smoothness used while precise mode is on. Usually lower than `smoothness`.
    pub precise_smoothness: f64,
    /// Multiplier applied to each impulse before it is added to the velocity (`0.1..=10`).
    pub velocity_gain: f64,
    /// Velocity magnitude below which the model settles (`0.01..=2`).
    pub stop_velocity: f64,
    /// Extra gain for inputs arriving in quick succession (`0..=4`, `0` disables).
    ///
    /// An impulse whose `interval_ms` is below `burst_window_ms` gets its gain multiplied by
    /// `1 + burst_acceleration * (1 - interval_ms / burst_window_ms)`.
    pub burst_acceleration: f64,
    pub burst_window_ms: u64,
    pub reference_frame_secs: f64,
}

impl Default for VelocityOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityOptions {
    pub fn new() -> Self {
        Self {
            smoothness: 0.72,
            precise_smoothness: 0.3,
            velocity_gain: 1.0,
            stop_velocity: 0.5,
            burst_acceleration: 0.0,
            burst_window_ms: 80,
            reference_frame_secs: REFERENCE_FRAME_SECS,
        }
    }

    pub fn with_smoothness(mut self, smoothness: f64) -> Self {
        self.smoothness = smoothness;
        self
    }

    pub fn with_precise_smoothness(mut self, precise_smoothness: f64) -> Self {
        self.precise_smoothness = precise_smoothness;
        self
    }

    /// Sets the smoothness from a raw friction coefficient in `MIN_FRICTION..=MAX_FRICTION`.
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.smoothness = smoothness_for_friction(friction);
        self
    }

    pub fn with_velocity_gain(mut self, velocity_gain: f64) -> Self {
        self.velocity_gain = velocity_gain;
        self
    }

    pub fn with_stop_velocity(mut self, stop_velocity: f64) -> Self {
        self.stop_velocity = stop_velocity;
        self
    }

    pub fn with_burst(mut self, acceleration: f64, window_ms: u64) -> Self {
        self.burst_acceleration = acceleration;
        self.burst_window_ms = window_ms;
        self
    }

    pub fn with_reference_frame_secs(mut self, reference_frame_secs: f64) -> Self {
        self.reference_frame_secs = reference_frame_secs;
        self
    }

    pub fn friction(&self) -> f64 {
        friction_for_smoothness(self.smoothness)
    }

    pub fn precise_friction(&self) -> f64 {
        friction_for_smoothness(self.precise_smoothness)
    }

    /// Returns a copy with every field inside its valid range.
    pub fn sanitized(self) -> Self {
        let defaults = Self::new();
        Self {
            smoothness: clamp_param("smoothness", self.smoothness, 0.0, 1.0, defaults.smoothness),
            precise_smoothness: clamp_param(
                "precise_smoothness",
                self.precise_smoothness,
                0.0,
                1.0,
                defaults.precise_smoothness,
            ),
            velocity_gain: clamp_param(
                "velocity_gain",
                self.velocity_gain,
                0.1,
                10.0,
                defaults.velocity_gain,
            ),
            stop_velocity: clamp_param(
                "stop_velocity",
                self.stop_velocity,
                0.01,
                2.0,
                defaults.stop_velocity,
            ),
            burst_acceleration: clamp_param(
                "burst_acceleration",
                self.burst_acceleration,
                0.0,
                4.0,
                defaults.burst_acceleration,
            ),
            burst_window_ms: self.burst_window_ms,
            reference_frame_secs: clamp_param(
                "reference_frame_secs",
                self.reference_frame_secs,
                MIN_REFERENCE_FRAME_SECS,
                MAX_REFERENCE_FRAME_SECS,
                defaults.reference_frame_secs,
            ),
        }
    }
}

fn friction_for_smoothness(smoothness: f64) -> f64 {
    let s = smoothness.clamp(0.0, 1.0);
    MIN_FRICTION * (1.0 - s) + MAX_FRICTION * s
}

fn smoothness_for_friction(friction: f64) -> f64 {
    if friction.is_nan() {
        return VelocityOptions::new().smoothness;
    }
    (friction.clamp(MIN_FRICTION, MAX_FRICTION) - MIN_FRICTION) / (MAX_FRICTION - MIN_FRICTION)
}

/// Configuration for [`crate::LerpPhysics`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LerpOptions {
    /// Fraction of the remaining distance covered per reference frame (`0.01..=1`).
    pub lerp_factor: f64,
    /// Distance to the target below which the model snaps and settles (`0.01..=2`).
    pub epsilon: f64,
    pub reference_frame_secs: f64,
}

impl Default for LerpOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LerpOptions {
    pub fn new() -> Self {
        Self {
            lerp_factor: 0.5,
            epsilon: 0.5,
            reference_frame_secs: REFERENCE_FRAME_SECS,
        }
    }

    pub fn with_lerp_factor(mut self, lerp_factor: f64) -> Self {
        self.lerp_factor = lerp_factor;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_reference_frame_secs(mut self, reference_frame_secs: f64) -> Self {
        self.reference_frame_secs = reference_frame_secs;
        self
    }

    pub fn sanitized(self) -> Self {
        let defaults = Self::new();
        Self {
            lerp_factor: clamp_param(
                "lerp_factor",
                self.lerp_factor,
                0.01,
                1.0,
                defaults.lerp_factor,
            ),
            epsilon: clamp_param("epsilon", self.epsilon, 0.01, 2.0, defaults.epsilon),
            reference_frame_secs: clamp_param(
                "reference_frame_secs",
                self.reference_frame_secs,
                MIN_REFERENCE_FRAME_SECS,
                MAX_REFERENCE_FRAME_SECS,
                defaults.reference_frame_secs,
            ),
        }
    }
}

/// Configuration for [`crate::ExponentialPhysics`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExponentialOptions {
    /// Decay rate `k` in `remaining *= e^(-k * dt)` (`1..=20`). Higher arrives sooner.
    pub decay_rate: f64,
    /// Decay rate used while precise mode is on.
    pub precise_decay_rate: f64,
    /// Remaining distance below which the model jumps to the target (`0.1..=5`).
    pub stop_threshold: f64,
}

impl Default for ExponentialOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExponentialOptions {
    pub fn new() -> Self {
        Self {
            decay_rate: 8.0,
            precise_decay_rate: 14.0,
            stop_threshold: 0.5,
        }
    }

    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    pub fn with_precise_decay_rate(mut self, precise_decay_rate: f64) -> Self {
        self.precise_decay_rate = precise_decay_rate;
        self
    }

    pub fn with_stop_threshold(mut self, stop_threshold: f64) -> Self {
        self.stop_threshold = stop_threshold;
        self
    }

    pub fn sanitized(self) -> Self {
        let defaults = Self::new();
        Self {
            decay_rate: clamp_param("decay_rate", self.decay_rate, 1.0, 20.0, defaults.decay_rate),
            precise_decay_rate: clamp_param(
                "precise_decay_rate",
                self.precise_decay_rate,
                1.0,
                20.0,
                defaults.precise_decay_rate,
            ),
            stop_threshold: clamp_param(
                "stop_threshold",
                self.stop_threshold,
                0.1,
                5.0,
                defaults.stop_threshold,
            ),
        }
    }
}

/// Configuration for [`crate::HybridPhysics`]: momentum for wheel notches, lerp for precise input.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HybridOptions {
    pub velocity: VelocityOptions,
    pub lerp: LerpOptions,
}

impl HybridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: VelocityOptions) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_lerp(mut self, lerp: LerpOptions) -> Self {
        self.lerp = lerp;
        self
    }

    pub fn sanitized(self) -> Self {
        Self {
            velocity: self.velocity.sanitized(),
            lerp: self.lerp.sanitized(),
        }
    }
}
