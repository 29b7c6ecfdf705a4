use scroll_physics::ScrollPhysics;

/// Host-reported offsets within this distance of an expected value are considered equal.
pub(crate) const OFFSET_TOLERANCE: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Vertical, Axis::Horizontal];

    pub fn other(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Vertical => 0,
            Self::Horizontal => 1,
        }
    }
}

/// Which axes the controller animates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxes {
    #[default]
    VerticalOnly,
    HorizontalOnly,
    Both,
}

impl ScrollAxes {
    pub fn contains(self, axis: Axis) -> bool {
        match self {
            Self::VerticalOnly => axis == Axis::Vertical,
            Self::HorizontalOnly => axis == Axis::Horizontal,
            Self::Both => true,
        }
    }
}

/// A read-only view of one axis' reconciliation state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSnapshot {
    /// The offset the host view currently uses for layout.
    pub logical_offset: f64,
    /// The animated offset being rendered.
    pub visual_offset: f64,
    /// `visual_offset - logical_offset`.
    pub visual_delta: f64,
    pub is_stable: bool,
}

#[derive(Debug)]
pub(crate) struct AxisState {
    pub(crate) physics: Box<dyn ScrollPhysics>,
    pub(crate) logical: f64,
    pub(crate) visual: f64,
    /// Visual offset at the last logical sync.
    pub(crate) synced_visual: f64,
    /// A pushed offset the host has not reported back yet.
    pub(crate) pending_sync: Option<f64>,
    /// Part of the current motion episode.
    pub(crate) engaged: bool,
}

impl AxisState {
    pub(crate) fn new(physics: Box<dyn ScrollPhysics>, offset: f64) -> Self {
        Self {
            physics,
            logical: offset,
            visual: offset,
            synced_visual: offset,
            pending_sync: None,
            engaged: false,
        }
    }

    /// Resets both offsets to `offset` and clears any motion bookkeeping.
    pub(crate) fn rest_at(&mut self, offset: f64) {
        self.logical = offset;
        self.visual = offset;
        self.synced_visual = offset;
        self.pending_sync = None;
        self.engaged = false;
    }

    /// Starts a motion episode from the host's current offset.
    ///
    /// A push the host has not applied yet is where the content already appears, so motion
    /// continues from there instead of the stale host offset.
    pub(crate) fn begin(&mut self, host_offset: f64) {
        match self.pending_sync {
            Some(pending) => {
                self.logical = host_offset;
                self.visual = pending;
                self.synced_visual = pending;
            }
            None => self.rest_at(host_offset),
        }
        self.engaged = true;
    }

    /// Records an offset pushed to the host along with what the host reports right after.
    pub(crate) fn record_push(&mut self, target: f64, reported: f64) {
        self.logical = reported;
        self.synced_visual = target;
        self.pending_sync = if (reported - target).abs() <= OFFSET_TOLERANCE {
            None
        } else {
            // Applied on the host's next layout pass.
            Some(target)
        };
    }

    pub(crate) fn visual_delta(&self) -> f64 {
        self.visual - self.logical
    }

    /// The render-time translation that makes content at `logical` appear at `visual`.
    pub(crate) fn translation(&self) -> f64 {
        -self.visual_delta()
    }

    pub(crate) fn snapshot(&self) -> AxisSnapshot {
        AxisSnapshot {
            logical_offset: self.logical,
            visual_offset: self.visual,
            visual_delta: self.visual_delta(),
            is_stable: !self.engaged,
        }
    }
}
