use crate::physics::sanitize_dt;
use crate::{ScrollBounds, ScrollImpulse, ScrollPhysics, VelocityOptions};

/// Momentum scrolling with friction decay.
///
/// Each impulse is subtracted from the velocity as-is (times `velocity_gain`). A frame moves the
/// offset by `velocity * (1 - f)` and keeps `velocity * f`, where `f = friction^(dt / ref)`. The
/// displacements form a geometric series that sums to the velocity itself, so one impulse of
/// `delta` travels exactly `-delta * velocity_gain` no matter how the time is sliced.
#[derive(Clone, Debug)]
pub struct VelocityPhysics {
    options: VelocityOptions,
    velocity: f64,
    precise: bool,
    stable: bool,
}

impl Default for VelocityPhysics {
    fn default() -> Self {
        Self::new(VelocityOptions::default())
    }
}

impl VelocityPhysics {
    pub fn new(options: VelocityOptions) -> Self {
        Self {
            options: options.sanitized(),
            velocity: 0.0,
            precise: false,
            stable: true,
        }
    }

    pub fn options(&self) -> &VelocityOptions {
        &self.options
    }

    /// Replaces the tunables. Motion in flight continues with the new constants.
    pub fn set_options(&mut self, options: VelocityOptions) {
        self.options = options.sanitized();
    }

    /// Remaining velocity, i.e. the distance still to travel if left alone.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    fn friction(&self) -> f64 {
        if self.precise {
            self.options.precise_friction()
        } else {
            self.options.friction()
        }
    }

    fn impulse_gain(&self, interval_ms: Option<u64>) -> f64 {
        let gain = self.options.velocity_gain;
        let window = self.options.burst_window_ms;
        if self.options.burst_acceleration <= 0.0 || window == 0 {
            return gain;
        }
        match interval_ms {
            Some(interval) if interval < window => {
                let closeness = 1.0 - interval as f64 / window as f64;
                gain * (1.0 + self.options.burst_acceleration * closeness)
            }
            _ => gain,
        }
    }
}

impl ScrollPhysics for VelocityPhysics {
    fn on_scroll(&mut self, impulse: ScrollImpulse) {
        if impulse.is_empty() {
            return;
        }
        let gain = self.impulse_gain(impulse.interval_ms);
        self.velocity -= impulse.delta * gain;
        self.stable = false;
        ptrace!(
            delta = impulse.delta,
            gain,
            velocity = self.velocity,
            "VelocityPhysics::on_scroll"
        );
    }

    fn update(&mut self, current_offset: f64, dt: f64, bounds: ScrollBounds) -> f64 {
        if self.stable {
            return current_offset;
        }
        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return current_offset;
        }

        if self.velocity.abs() < self.options.stop_velocity {
            let rest = bounds.clamp(current_offset + self.velocity);
            self.velocity = 0.0;
            self.stable = true;
            return rest;
        }

        let time_factor = dt / self.options.reference_frame_secs;
        let f = self.friction().powf(time_factor);
        let displacement = self.velocity * (1.0 - f);
        self.velocity *= f;

        let next = current_offset + displacement;
        let clamped = bounds.clamp(next);
        if clamped != next {
            ptrace!(next, clamped, "VelocityPhysics: hit bound");
            self.velocity = 0.0;
            self.stable = true;
        }
        clamped
    }

    fn is_stable(&self) -> bool {
        self.stable
    }

    fn is_precise_mode(&self) -> bool {
        self.precise
    }

    fn set_precise_mode(&mut self, precise: bool) {
        self.precise = precise;
    }

    fn reset(&mut self) {
        self.velocity = 0.0;
        self.stable = true;
    }

    fn clone_fresh(&self) -> Box<dyn ScrollPhysics> {
        Box::new(Self::new(self.options))
    }
}
