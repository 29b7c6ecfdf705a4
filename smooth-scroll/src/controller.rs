use core::time::Duration;

use scroll_physics::{HybridPhysics, ScrollBounds, ScrollImpulse, ScrollPhysics};

use crate::axis::{AxisState, OFFSET_TOLERANCE};
use crate::{
    Axis, AxisSnapshot, FrameClock, FrameSubscription, PrecisionDetector, ScrollHost,
    SmoothScrollOptions, WheelEvent,
};

/// A framework-neutral smooth scrolling controller.
///
/// Owns the host view adapter `H` and the frame clock `C`. Adapters drive it by calling:
/// - `on_wheel` / `on_scroll` / `on_pan` when input arrives
/// - `on_frame(dt)` (or `on_frame_at(now)`) on every tick while subscribed to the clock
/// - `notify_offset_changed` when the host reports an offset change
/// - `detach` when the host view goes away
///
/// Axes run independent physics: a diagonal pan animates both at once. The frame clock is only
/// subscribed while some axis is in motion, and dropping the controller unsubscribes it.
#[derive(Debug)]
pub struct SmoothScroller<H: ScrollHost, C: FrameClock> {
    host: H,
    clock: C,
    options: SmoothScrollOptions,
    axes: [AxisState; 2],
    detector: PrecisionDetector,
    subscription: Option<FrameSubscription>,
    sync_elapsed: f64,
    last_frame_at: Option<Duration>,
}

impl<H: ScrollHost, C: FrameClock> SmoothScroller<H, C> {
    /// Creates a controller using [`HybridPhysics`] on every axis.
    pub fn new(host: H, clock: C, options: SmoothScrollOptions) -> Self {
        Self::with_physics(host, clock, options, &HybridPhysics::default())
    }

    /// Creates a controller whose axes each get an independent copy of `prototype`.
    pub fn with_physics(
        host: H,
        clock: C,
        options: SmoothScrollOptions,
        prototype: &dyn ScrollPhysics,
    ) -> Self {
        let options = options.sanitized();
        let axes = Axis::ALL.map(|axis| AxisState::new(prototype.clone_fresh(), host.offset(axis)));
        sdebug!(?options, ?prototype, "SmoothScroller::new");
        Self {
            host,
            clock,
            detector: PrecisionDetector::new(options.wheel_notch, options.precise_burst_window_ms),
            options,
            axes,
            subscription: None,
            sync_elapsed: 0.0,
            last_frame_at: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host. If you move its offset, report it via
    /// [`Self::notify_offset_changed`].
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn options(&self) -> &SmoothScrollOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SmoothScrollOptions) {
        self.options = options.sanitized();
        self.detector =
            PrecisionDetector::new(self.options.wheel_notch, self.options.precise_burst_window_ms);
        for axis in Axis::ALL {
            if !self.options.axes.contains(axis) && self.axes[axis.index()].engaged {
                self.settle_axis(axis);
            }
        }
        self.stop_frames_if_idle();
    }

    /// Replaces the physics of both axes with fresh copies of `prototype`.
    ///
    /// Motion in flight is settled first.
    pub fn set_physics(&mut self, prototype: &dyn ScrollPhysics) {
        self.settle_all();
        for state in self.axes.iter_mut() {
            state.physics = prototype.clone_fresh();
        }
    }

    pub fn physics(&self, axis: Axis) -> &dyn ScrollPhysics {
        self.axes[axis.index()].physics.as_ref()
    }

    /// Whether the frame clock is subscribed.
    pub fn is_animating(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn is_stable(&self, axis: Axis) -> bool {
        !self.axes[axis.index()].engaged
    }

    pub fn snapshot(&self, axis: Axis) -> AxisSnapshot {
        self.axes[axis.index()].snapshot()
    }

    /// Routes a wheel event to an axis, classifies it, and feeds it to that axis' physics.
    ///
    /// Returns `true` when the event set the axis in motion.
    pub fn on_wheel(&mut self, event: WheelEvent) -> bool {
        let axis = self.wheel_axis(event.shift);
        let class = self.detector.classify(event.delta, event.timestamp_ms);
        strace!(
            delta = event.delta,
            ?axis,
            is_precise = class.is_precise,
            "SmoothScroller::on_wheel"
        );
        self.on_scroll(axis, event.delta, class.is_precise, class.interval_ms)
    }

    /// Feeds a touch/manipulation pan delta to both axes (always precise).
    ///
    /// Returns `true` when at least one axis is in motion afterwards.
    pub fn on_pan(&mut self, delta_x: f64, delta_y: f64) -> bool {
        let h = self.on_scroll(Axis::Horizontal, delta_x, true, None);
        let v = self.on_scroll(Axis::Vertical, delta_y, true, None);
        h || v
    }

    /// Feeds one input impulse to `axis`.
    ///
    /// Does nothing (and returns `false`) when the axis is disabled, the delta is empty, or the
    /// host reports no scrollable extent.
    pub fn on_scroll(
        &mut self,
        axis: Axis,
        delta: f64,
        is_precise: bool,
        interval_ms: Option<u64>,
    ) -> bool {
        if !self.options.axes.contains(axis) || !delta.is_finite() || delta == 0.0 {
            return false;
        }
        if !self.host.can_scroll(axis) {
            strace!(?axis, "SmoothScroller::on_scroll: axis cannot scroll");
            return false;
        }

        let bounds = self.bounds(axis);
        let state = &mut self.axes[axis.index()];
        if !state.engaged {
            state.begin(self.host.offset(axis));
            self.host.set_translation(axis, state.translation());
        }

        state.physics.set_precise_mode(is_precise);
        state.physics.on_scroll(
            ScrollImpulse::new(delta)
                .with_precise(is_precise)
                .with_interval_ms(interval_ms)
                .at(state.visual, bounds),
        );

        if state.physics.is_stable() {
            self.settle_axis(axis);
            self.stop_frames_if_idle();
            return false;
        }
        self.start_frames();
        true
    }

    /// Advances all axes in motion by `dt` seconds.
    ///
    /// Returns `true` while animation continues. Ticks delivered while not subscribed are ignored.
    pub fn on_frame(&mut self, dt: f64) -> bool {
        if self.subscription.is_none() {
            return false;
        }
        let dt = if dt.is_finite() && dt > 0.0 {
            dt.min(self.options.max_frame_secs)
        } else {
            0.0
        };

        for axis in Axis::ALL {
            if !self.axes[axis.index()].engaged {
                continue;
            }
            let bounds = self.bounds(axis);
            let state = &mut self.axes[axis.index()];
            let next = state.physics.update(state.visual, dt, bounds);
            state.visual = bounds.clamp(next);
            if state.physics.is_stable() {
                self.settle_axis(axis);
            }
        }

        if self.stop_frames_if_idle() {
            return false;
        }

        self.sync_elapsed += dt;
        if self.sync_due() {
            self.sync_elapsed = 0.0;
            for axis in Axis::ALL {
                if self.axes[axis.index()].engaged {
                    self.push_sync(axis);
                }
            }
        }

        for axis in Axis::ALL {
            let state = &self.axes[axis.index()];
            if state.engaged {
                self.host.set_translation(axis, state.translation());
            }
        }
        true
    }

    /// Same as [`Self::on_frame`], deriving `dt` from a monotonic timestamp.
    ///
    /// The first tick after the animation starts uses `dt = 0`.
    pub fn on_frame_at(&mut self, now: Duration) -> bool {
        let dt = match self.last_frame_at {
            Some(prev) => now.saturating_sub(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last_frame_at = Some(now);
        self.on_frame(dt)
    }

    /// Call this when the host reports that its offset along `axis` changed.
    ///
    /// Changes caused by the controller's own syncs are absorbed. Any other change while the axis
    /// is in motion (e.g. a scrollbar drag) wins: the axis stops and the overlay is cleared.
    pub fn notify_offset_changed(&mut self, axis: Axis) {
        let reported = self.host.offset(axis);
        let state = &mut self.axes[axis.index()];

        if !state.engaged {
            state.rest_at(reported);
            return;
        }

        let own_sync = state
            .pending_sync
            .is_some_and(|pending| (reported - pending).abs() <= OFFSET_TOLERANCE);
        if own_sync || (reported - state.logical).abs() <= OFFSET_TOLERANCE {
            if own_sync {
                state.pending_sync = None;
            }
            state.logical = reported;
            let translation = state.translation();
            self.host.set_translation(axis, translation);
            return;
        }

        sdebug!(
            ?axis,
            reported,
            logical = state.logical,
            "external offset change; abandoning smoothing"
        );
        state.physics.reset();
        state.rest_at(reported);
        self.host.set_translation(axis, 0.0);
        self.stop_frames_if_idle();
    }

    /// Settles any motion at its current visual offset and unsubscribes from the frame clock.
    ///
    /// Call this when the host view is unloaded.
    pub fn detach(&mut self) {
        self.settle_all();
        self.detector.reset();
    }

    fn wheel_axis(&self, shift: bool) -> Axis {
        let preferred = if shift && self.options.shift_swaps_axes {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        if self.options.axes.contains(preferred) {
            preferred
        } else {
            preferred.other()
        }
    }

    fn bounds(&self, axis: Axis) -> ScrollBounds {
        let max = self.host.max_offset(axis);
        ScrollBounds::up_to(if max.is_finite() { max.max(0.0) } else { 0.0 })
    }

    fn sync_due(&self) -> bool {
        if self.sync_elapsed >= self.options.sync_interval_secs {
            return true;
        }
        let Some(distance) = self.options.sync_distance else {
            return false;
        };
        self.axes
            .iter()
            .any(|s| s.engaged && (s.visual - s.synced_visual).abs() >= distance)
    }

    /// Pushes the visual offset to the host as the new logical offset.
    fn push_sync(&mut self, axis: Axis) {
        let target = self.axes[axis.index()].visual;
        self.host.set_offset(axis, target);
        let reported = self.host.offset(axis);

        self.axes[axis.index()].record_push(target, reported);
        strace!(?axis, target, reported, "logical sync");
    }

    /// Final reconciliation for one axis: the clamped visual offset becomes the logical offset.
    ///
    /// A host that applies the push later keeps it pending, so its notification is still
    /// recognised as the controller's own.
    fn settle_axis(&mut self, axis: Axis) {
        let bounds = self.bounds(axis);
        let rest = bounds.clamp(self.axes[axis.index()].visual);
        self.host.set_offset(axis, rest);
        let reported = self.host.offset(axis);

        let state = &mut self.axes[axis.index()];
        state.physics.reset();
        state.rest_at(rest);
        state.record_push(rest, reported);
        self.host.set_translation(axis, 0.0);
        sdebug!(?axis, rest, reported, "axis settled");
    }

    fn settle_all(&mut self) {
        for axis in Axis::ALL {
            if self.axes[axis.index()].engaged {
                self.settle_axis(axis);
            }
        }
        self.stop_frames_if_idle();
    }

    fn start_frames(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        self.subscription = Some(self.clock.subscribe());
        self.sync_elapsed = 0.0;
        self.last_frame_at = None;
        self.host.set_hit_test_visible(false);
        sdebug!("animation started");
    }

    /// Unsubscribes once no axis is in motion. Returns `true` when idle.
    fn stop_frames_if_idle(&mut self) -> bool {
        if self.axes.iter().any(|s| s.engaged) {
            return false;
        }
        if let Some(subscription) = self.subscription.take() {
            self.clock.unsubscribe(subscription);
            self.sync_elapsed = 0.0;
            self.last_frame_at = None;
            self.host.set_hit_test_visible(true);
            sdebug!("animation stopped");
        }
        true
    }
}

impl<H: ScrollHost, C: FrameClock> Drop for SmoothScroller<H, C> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.clock.unsubscribe(subscription);
        }
    }
}
