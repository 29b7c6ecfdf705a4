// Example: a simulated list view driven by wheel notches at 120 Hz.
use smooth_scroll::{
    Axis, FrameClock, FrameSubscription, ScrollHost, SmoothScrollOptions, SmoothScroller,
    WheelEvent,
};

struct ListView {
    offset: f64,
    max_offset: f64,
    translation: f64,
    layouts: u32,
}

impl ScrollHost for ListView {
    fn offset(&self, _axis: Axis) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, _axis: Axis, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset);
        // A real list would re-run virtualization here.
        self.layouts += 1;
    }

    fn max_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.max_offset,
            Axis::Horizontal => 0.0,
        }
    }

    fn set_translation(&mut self, _axis: Axis, translation: f64) {
        self.translation = translation;
    }

    fn set_hit_test_visible(&mut self, _visible: bool) {}
}

#[derive(Default)]
struct Vsync {
    subscribed: bool,
}

impl FrameClock for Vsync {
    fn subscribe(&mut self) -> FrameSubscription {
        self.subscribed = true;
        FrameSubscription(1)
    }

    fn unsubscribe(&mut self, _subscription: FrameSubscription) {
        self.subscribed = false;
    }
}

fn main() {
    let view = ListView {
        offset: 0.0,
        max_offset: 50_000.0,
        translation: 0.0,
        layouts: 0,
    };
    let mut scroller = SmoothScroller::new(view, Vsync::default(), SmoothScrollOptions::new());

    // Three notches down, 40ms apart.
    let mut frame = 0u32;
    for (i, ts) in [0u64, 40, 80].into_iter().enumerate() {
        scroller.on_wheel(WheelEvent::new(-120.0, ts));
        for _ in 0..5 {
            scroller.on_frame(1.0 / 120.0);
            frame += 1;
        }
        println!("notch {i}: {:?}", scroller.snapshot(Axis::Vertical));
    }

    while scroller.clock().subscribed {
        scroller.on_frame(1.0 / 120.0);
        frame += 1;
        if frame % 10 == 0 {
            let snap = scroller.snapshot(Axis::Vertical);
            println!(
                "frame={frame:>3} logical={:.1} visual={:.1} translation={:.1}",
                snap.logical_offset,
                snap.visual_offset,
                scroller.host().translation
            );
        }
    }

    println!(
        "settled at {:.1} after {frame} frames and {} layout passes",
        scroller.host().offset,
        scroller.host().layouts
    );
}
