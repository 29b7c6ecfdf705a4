use crate::physics::sanitize_dt;
use crate::{ExponentialOptions, ScrollBounds, ScrollImpulse, ScrollPhysics};

/// Exponential ease-out over the remaining distance.
///
/// Follows `offset = target + (start - target) * e^(-k * t)`: fast start, slow end. Impulses add
/// to the remaining distance, so continuous wheel input keeps extending the glide.
#[derive(Clone, Debug)]
pub struct ExponentialPhysics {
    options: ExponentialOptions,
    remaining_distance: f64,
    precise: bool,
    stable: bool,
}

impl Default for ExponentialPhysics {
    fn default() -> Self {
        Self::new(ExponentialOptions::default())
    }
}

impl ExponentialPhysics {
    pub fn new(options: ExponentialOptions) -> Self {
        Self {
            options: options.sanitized(),
            remaining_distance: 0.0,
            precise: false,
            stable: true,
        }
    }

    pub fn options(&self) -> &ExponentialOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ExponentialOptions) {
        self.options = options.sanitized();
    }

    /// Signed distance still to travel (negative moves towards `min`).
    pub fn remaining_distance(&self) -> f64 {
        self.remaining_distance
    }

    fn decay_rate(&self) -> f64 {
        if self.precise {
            self.options.precise_decay_rate
        } else {
            self.options.decay_rate
        }
    }
}

impl ScrollPhysics for ExponentialPhysics {
    fn on_scroll(&mut self, impulse: ScrollImpulse) {
        if impulse.is_empty() {
            return;
        }
        self.remaining_distance -= impulse.delta;
        self.stable = false;
        ptrace!(
            delta = impulse.delta,
            remaining = self.remaining_distance,
            "ExponentialPhysics::on_scroll"
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

        if self.remaining_distance.abs() < self.options.stop_threshold {
            let rest = bounds.clamp(current_offset + self.remaining_distance);
            self.remaining_distance = 0.0;
            self.stable = true;
            return rest;
        }

        let factor = 1.0 - (-self.decay_rate() * dt).exp();
        let displacement = self.remaining_distance * factor;
        self.remaining_distance -= displacement;

        let next = current_offset + displacement;
        let clamped = bounds.clamp(next);
        if clamped != next {
            self.remaining_distance = 0.0;
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
        self.remaining_distance = 0.0;
        self.stable = true;
    }

    fn clone_fresh(&self) -> Box<dyn ScrollPhysics> {
        Box::new(Self::new(self.options))
    }
}
