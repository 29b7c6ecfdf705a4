use crate::ScrollAxes;

const MIN_SYNC_INTERVAL_SECS: f64 = 1.0 / 240.0;
const MAX_SYNC_INTERVAL_SECS: f64 = 1.0;

/// Configuration for [`crate::SmoothScroller`].
///
/// Out-of-range values are clamped when the options are handed to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothScrollOptions {
    pub axes: ScrollAxes,
    /// Shift + wheel scrolls horizontally (when the horizontal axis is enabled).
    pub shift_swaps_axes: bool,
    /// Minimum time between logical offset pushes while animating.
    pub sync_interval_secs: f64,
    /// Also push the logical offset once the visual offset has drifted this far since the last
    /// push. `None` syncs on time only.
    pub sync_distance: Option<f64>,
    /// Ceiling for a single frame's `dt`, so a stalled clock does not produce one giant step.
    pub max_frame_secs: f64,
    /// Wheel delta of one notch on the host platform.
    pub wheel_notch: f64,
    /// Sub-notch deltas this close together are treated as a trackpad burst.
    pub precise_burst_window_ms: u64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SmoothScrollOptions {
    pub fn new() -> Self {
        Self {
            axes: ScrollAxes::VerticalOnly,
            shift_swaps_axes: true,
            sync_interval_secs: 1.0 / 24.0,
            sync_distance: None,
            max_frame_secs: 0.25,
            wheel_notch: 120.0,
            precise_burst_window_ms: 100,
        }
    }

    pub fn with_axes(mut self, axes: ScrollAxes) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_shift_swaps_axes(mut self, shift_swaps_axes: bool) -> Self {
        self.shift_swaps_axes = shift_swaps_axes;
        self
    }

    pub fn with_sync_interval_secs(mut self, sync_interval_secs: f64) -> Self {
        self.sync_interval_secs = sync_interval_secs;
        self
    }

    pub fn with_sync_distance(mut self, sync_distance: Option<f64>) -> Self {
        self.sync_distance = sync_distance;
        self
    }

    pub fn with_max_frame_secs(mut self, max_frame_secs: f64) -> Self {
        self.max_frame_secs = max_frame_secs;
        self
    }

    pub fn with_wheel_notch(mut self, wheel_notch: f64) -> Self {
        self.wheel_notch = wheel_notch;
        self
    }

    pub fn with_precise_burst_window_ms(mut self, window_ms: u64) -> Self {
        self.precise_burst_window_ms = window_ms;
        self
    }

    /// Returns a copy with every field inside its valid range.
    pub fn sanitized(self) -> Self {
        let defaults = Self::new();
        let sync_distance = match self.sync_distance {
            Some(d) if d.is_finite() && d > 0.0 => Some(d),
            Some(_d) => {
                swarn!(sync_distance = _d, "sync_distance must be positive; disabled");
                None
            }
            None => None,
        };
        Self {
            axes: self.axes,
            shift_swaps_axes: self.shift_swaps_axes,
            sync_interval_secs: clamp_param(
                "sync_interval_secs",
                self.sync_interval_secs,
                MIN_SYNC_INTERVAL_SECS,
                MAX_SYNC_INTERVAL_SECS,
                defaults.sync_interval_secs,
            ),
            sync_distance,
            max_frame_secs: clamp_param(
                "max_frame_secs",
                self.max_frame_secs,
                1.0 / 1000.0,
                1.0,
                defaults.max_frame_secs,
            ),
            wheel_notch: clamp_param(
                "wheel_notch",
                self.wheel_notch,
                1.0,
                f64::MAX,
                defaults.wheel_notch,
            ),
            precise_burst_window_ms: self.precise_burst_window_ms,
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn clamp_param(name: &'static str, value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        swarn!(option = name, fallback, "option is NaN; using fallback");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        swarn!(option = name, value, clamped, "option out of range; clamped");
    }
    clamped
}
