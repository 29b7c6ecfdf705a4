/// The scrollable range of one axis, `[min, max]`.
///
/// Every offset a model returns is clamped into this range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollBounds {
    pub min: f64,
    pub max: f64,
}

impl ScrollBounds {
    /// No clamping at all. Useful for tests and free-running simulations.
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Creates bounds, repairing inverted or NaN limits.
    pub fn new(min: f64, max: f64) -> Self {
        let min = if min.is_nan() { 0.0 } else { min };
        let max = if max.is_nan() { min } else { max.max(min) };
        Self { min, max }
    }

    /// `[0, max]`, the usual shape of a scroll view's range.
    pub fn up_to(max: f64) -> Self {
        Self::new(0.0, max)
    }

    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.min && offset <= self.max
    }

    /// Clamps `offset` into the range. NaN is mapped to `min`.
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.min;
        }
        if offset < self.min {
            self.min
        } else if offset > self.max {
            self.max
        } else {
            offset
        }
    }
}

impl Default for ScrollBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// A single scroll input, as delivered to [`crate::ScrollPhysics::on_scroll`].
///
/// Momentum models only look at `delta`, `is_precise` and `interval_ms`. Position-seeking models
/// also need the offset the input was applied at and the bounds to clamp the target to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollImpulse {
    /// Signed input magnitude in device units (one wheel notch is typically `120`).
    pub delta: f64,
    /// Trackpad/touch input rather than a discrete wheel notch.
    pub is_precise: bool,
    /// Time since the previous input, if known.
    pub interval_ms: Option<u64>,
    /// The (visual) offset at the time of the input.
    pub current_offset: f64,
    pub bounds: ScrollBounds,
}

impl ScrollImpulse {
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            is_precise: false,
            interval_ms: None,
            current_offset: 0.0,
            bounds: ScrollBounds::UNBOUNDED,
        }
    }

    pub fn precise(delta: f64) -> Self {
        Self::new(delta).with_precise(true)
    }

    pub fn with_precise(mut self, is_precise: bool) -> Self {
        self.is_precise = is_precise;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: Option<u64>) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets the offset and bounds the input applies to.
    pub fn at(mut self, current_offset: f64, bounds: ScrollBounds) -> Self {
        self.current_offset = current_offset;
        self.bounds = bounds;
        self
    }

    /// Zero and non-finite deltas carry no motion.
    pub(crate) fn is_empty(&self) -> bool {
        !self.delta.is_finite() || self.delta == 0.0
    }
}
