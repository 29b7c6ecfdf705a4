// Example: compare the models on the same wheel input at 60 Hz.
use scroll_physics::{
    ExponentialPhysics, HybridPhysics, LerpPhysics, ScrollBounds, ScrollImpulse, ScrollPhysics,
    VelocityPhysics,
};

fn main() {
    let bounds = ScrollBounds::up_to(5_000.0);
    let models: Vec<(&str, Box<dyn ScrollPhysics>)> = vec![
        ("velocity", Box::new(VelocityPhysics::default())),
        ("lerp", Box::new(LerpPhysics::default())),
        ("exponential", Box::new(ExponentialPhysics::default())),
        ("hybrid", Box::new(HybridPhysics::default())),
    ];

    for (name, mut model) in models {
        let mut offset = 1_000.0;
        // Three notches down, 30ms apart.
        for _ in 0..3 {
            model.on_scroll(
                ScrollImpulse::new(-120.0)
                    .with_interval_ms(Some(30))
                    .at(offset, bounds),
            );
            offset = model.update(offset, 1.0 / 60.0, bounds);
        }

        let mut frame = 0u32;
        while !model.is_stable() {
            offset = model.update(offset, 1.0 / 60.0, bounds);
            frame += 1;
            if frame % 10 == 0 {
                println!("{name:>11} frame={frame:>3} offset={offset:.2}");
            }
        }
        println!("{name:>11} settled at {offset:.2} after {frame} frames");
    }
}
