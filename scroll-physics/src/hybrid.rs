use crate::{
    HybridOptions, LerpPhysics, ScrollBounds, ScrollImpulse, ScrollPhysics, VelocityPhysics,
};

/// Which sub-model is driving a [`HybridPhysics`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionMode {
    /// Velocity decay (coarse wheel notches).
    Momentum,
    /// Lerp to target (trackpad, touch, stylus).
    Seek,
}

/// Routes each impulse by its precision: precise input seeks a target, coarse input adds momentum.
///
/// Switching to seek mode discards residual velocity. Switching to momentum abandons the pending
/// target and continues from wherever the offset currently is.
#[derive(Clone, Debug)]
pub struct HybridPhysics {
    velocity: VelocityPhysics,
    lerp: LerpPhysics,
    mode: MotionMode,
    precise: bool,
}

impl Default for HybridPhysics {
    fn default() -> Self {
        Self::new(HybridOptions::default())
    }
}

impl HybridPhysics {
    pub fn new(options: HybridOptions) -> Self {
        Self {
            velocity: VelocityPhysics::new(options.velocity),
            lerp: LerpPhysics::new(options.lerp),
            mode: MotionMode::Momentum,
            precise: false,
        }
    }

    pub fn options(&self) -> HybridOptions {
        HybridOptions {
            velocity: *self.velocity.options(),
            lerp: *self.lerp.options(),
        }
    }

    pub fn set_options(&mut self, options: HybridOptions) {
        self.velocity.set_options(options.velocity);
        self.lerp.set_options(options.lerp);
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn velocity_model(&self) -> &VelocityPhysics {
        &self.velocity
    }

    pub fn lerp_model(&self) -> &LerpPhysics {
        &self.lerp
    }
}

impl ScrollPhysics for HybridPhysics {
    fn on_scroll(&mut self, impulse: ScrollImpulse) {
        if impulse.is_empty() {
            return;
        }
        if impulse.is_precise {
            if self.mode != MotionMode::Seek {
                self.velocity.reset();
                // Start seeking from the offset the momentum had reached.
                self.lerp.reset();
                self.mode = MotionMode::Seek;
                pdebug!(mode = ?self.mode, "HybridPhysics: switched mode");
            }
            self.lerp.on_scroll(impulse);
        } else {
            if self.mode != MotionMode::Momentum {
                self.lerp.reset();
                self.mode = MotionMode::Momentum;
                pdebug!(mode = ?self.mode, "HybridPhysics: switched mode");
            }
            self.velocity.on_scroll(impulse);
        }
    }

    fn update(&mut self, current_offset: f64, dt: f64, bounds: ScrollBounds) -> f64 {
        match self.mode {
            MotionMode::Momentum => self.velocity.update(current_offset, dt, bounds),
            MotionMode::Seek => self.lerp.update(current_offset, dt, bounds),
        }
    }

    fn is_stable(&self) -> bool {
        self.velocity.is_stable() && self.lerp.is_stable()
    }

    fn is_precise_mode(&self) -> bool {
        self.precise
    }

    fn set_precise_mode(&mut self, precise: bool) {
        self.precise = precise;
        self.velocity.set_precise_mode(precise);
    }

    fn reset(&mut self) {
        self.velocity.reset();
        self.lerp.reset();
        self.mode = MotionMode::Momentum;
    }

    fn clone_fresh(&self) -> Box<dyn ScrollPhysics> {
        Box::new(Self::new(self.options()))
    }
}
