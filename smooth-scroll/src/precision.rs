/// A mouse-wheel (or trackpad-as-wheel) event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelEvent {
    /// Signed wheel delta; positive scrolls towards the start of the content.
    pub delta: f64,
    /// Shift was held (horizontal scrolling on most platforms).
    pub shift: bool,
    /// Monotonic event timestamp.
    pub timestamp_ms: u64,
}

impl WheelEvent {
    pub fn new(delta: f64, timestamp_ms: u64) -> Self {
        Self {
            delta,
            shift: false,
            timestamp_ms,
        }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

/// The result of [`PrecisionDetector::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputClass {
    pub is_precise: bool,
    /// Time since the previous classified event.
    pub interval_ms: Option<u64>,
}

/// Tells trackpad scrolling apart from discrete wheel notches.
///
/// A delta is precise when it is not a whole number of notches, or when it follows a sub-notch
/// delta within the burst window (trackpads occasionally emit notch-sized deltas mid-gesture).
#[derive(Clone, Debug)]
pub struct PrecisionDetector {
    notch: f64,
    burst_window_ms: u64,
    last: Option<(f64, u64)>,
}

impl PrecisionDetector {
    pub fn new(notch: f64, burst_window_ms: u64) -> Self {
        Self {
            notch: if notch.is_finite() && notch >= 1.0 { notch } else { 120.0 },
            burst_window_ms,
            last: None,
        }
    }

    pub fn classify(&mut self, delta: f64, timestamp_ms: u64) -> InputClass {
        let interval_ms = self
            .last
            .map(|(_, last_ms)| timestamp_ms.saturating_sub(last_ms));
        let in_burst = match (self.last, interval_ms) {
            (Some((last_delta, _)), Some(interval)) => {
                interval < self.burst_window_ms && !self.is_whole_notches(last_delta)
            }
            _ => false,
        };
        self.last = Some((delta, timestamp_ms));

        InputClass {
            is_precise: !self.is_whole_notches(delta) || in_burst,
            interval_ms,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    fn is_whole_notches(&self, delta: f64) -> bool {
        delta.is_finite() && (delta % self.notch).abs() < 1e-9
    }
}
