use crate::physics::sanitize_dt;
use crate::{LerpOptions, ScrollBounds, ScrollImpulse, ScrollPhysics};

/// Position-seeking interpolation towards an absolute target.
///
/// Input is treated as "move the content by `delta`", not as momentum: the target becomes
/// `offset - delta` (clamped), and each frame covers `1 - (1 - lerp_factor)^(dt / ref)` of the
/// remaining distance. When the remainder drops below `epsilon` the model lands exactly on the
/// target.
#[derive(Clone, Debug)]
pub struct LerpPhysics {
    options: LerpOptions,
    target_offset: f64,
    stable: bool,
}

impl Default for LerpPhysics {
    fn default() -> Self {
        Self::new(LerpOptions::default())
    }
}

impl LerpPhysics {
    pub fn new(options: LerpOptions) -> Self {
        Self {
            options: options.sanitized(),
            target_offset: 0.0,
            stable: true,
        }
    }

    pub fn options(&self) -> &LerpOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LerpOptions) {
        self.options = options.sanitized();
    }

    /// The target of the current motion, or `None` when settled.
    pub fn target_offset(&self) -> Option<f64> {
        (!self.stable).then_some(self.target_offset)
    }
}

impl ScrollPhysics for LerpPhysics {
    fn on_scroll(&mut self, impulse: ScrollImpulse) {
        if impulse.is_empty() {
            return;
        }
        // Mid-motion impulses extend the pending target instead of restarting from the offset.
        let base = if self.stable {
            impulse.current_offset
        } else {
            self.target_offset
        };
        self.target_offset = impulse.bounds.clamp(base - impulse.delta);
        self.stable = false;
        ptrace!(
            delta = impulse.delta,
            target = self.target_offset,
            "LerpPhysics::on_scroll"
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

        // The range may have shrunk since the target was chosen.
        self.target_offset = bounds.clamp(self.target_offset);

        let time_factor = dt / self.options.reference_frame_secs;
        let lerp = 1.0 - (1.0 - self.options.lerp_factor).powf(time_factor);
        let mut next = current_offset + (self.target_offset - current_offset) * lerp;

        if (self.target_offset - next).abs() < self.options.epsilon {
            next = self.target_offset;
            self.stable = true;
        }
        bounds.clamp(next)
    }

    fn is_stable(&self) -> bool {
        self.stable
    }

    fn reset(&mut self) {
        self.stable = true;
    }

    fn clone_fresh(&self) -> Box<dyn ScrollPhysics> {
        Box::new(Self::new(self.options))
    }
}
