use crate::Axis;

/// The scroll view being driven, as seen by [`crate::SmoothScroller`].
///
/// Offsets are in the host's own units, with `0` at the start of the content.
pub trait ScrollHost {
    /// The current (logical) offset.
    fn offset(&self, axis: Axis) -> f64;

    /// Moves the logical offset. Hosts may apply this immediately or after their next layout
    /// pass; in the latter case they should report the change through
    /// [`crate::SmoothScroller::notify_offset_changed`].
    fn set_offset(&mut self, axis: Axis, offset: f64);

    /// The largest valid offset (content extent minus viewport extent).
    fn max_offset(&self, axis: Axis) -> f64;

    fn can_scroll(&self, axis: Axis) -> bool {
        self.max_offset(axis) > 0.0
    }

    /// Sets the render-only translation applied to the content along `axis`.
    fn set_translation(&mut self, axis: Axis, translation: f64);

    /// Enables or disables hit-testing on the content.
    fn set_hit_test_visible(&mut self, visible: bool);
}

/// A handle returned by [`FrameClock::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSubscription(pub u64);

/// A per-frame tick source (e.g. a compositor "rendering" callback or a vsync timer).
///
/// While a subscription is live, the adapter calls [`crate::SmoothScroller::on_frame`] (or
/// `on_frame_at`) once per frame. After `unsubscribe`, no more ticks may be delivered.
pub trait FrameClock {
    fn subscribe(&mut self) -> FrameSubscription;

    fn unsubscribe(&mut self, subscription: FrameSubscription);
}
