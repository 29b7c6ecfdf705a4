use crate::*;

const DT_144: f64 = 1.0 / 144.0;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_f64(&mut self, start: f64, end: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        start + (end - start) * unit
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Runs `update` until the model settles. Returns the final offset and the number of frames.
fn run_until_stable(
    model: &mut dyn ScrollPhysics,
    start: f64,
    dt: f64,
    bounds: ScrollBounds,
    max_frames: usize,
) -> (f64, usize) {
    let mut offset = start;
    for frame in 1..=max_frames {
        offset = model.update(offset, dt, bounds);
        assert!(
            bounds.contains(offset),
            "offset {offset} escaped {bounds:?} at frame {frame}"
        );
        if model.is_stable() {
            return (offset, frame);
        }
    }
    panic!("model did not settle within {max_frames} frames: {model:?}");
}

fn run_for(model: &mut dyn ScrollPhysics, start: f64, dt: f64, steps: usize) -> f64 {
    let mut offset = start;
    for _ in 0..steps {
        offset = model.update(offset, dt, ScrollBounds::UNBOUNDED);
    }
    offset
}

fn pair_of<M: ScrollPhysics + Default + 'static>() -> [Box<dyn ScrollPhysics>; 2] {
    [Box::new(M::default()), Box::new(M::default())]
}

fn all_models() -> Vec<Box<dyn ScrollPhysics>> {
    vec![
        Box::new(VelocityPhysics::default()),
        Box::new(LerpPhysics::default()),
        Box::new(ExponentialPhysics::default()),
        Box::new(HybridPhysics::default()),
    ]
}

#[test]
fn velocity_single_notch_travels_exactly_one_impulse() {
    let mut m = VelocityPhysics::new(VelocityOptions::new().with_friction(0.92));
    assert!((m.options().friction() - 0.92).abs() < 1e-12);
    m.on_scroll(ScrollImpulse::new(120.0));
    assert!(!m.is_stable());

    let mut offset = 0.0;
    let mut settled_at = None;
    for i in 0..300 {
        offset = m.update(offset, DT_144, ScrollBounds::UNBOUNDED);
        if settled_at.is_none() && m.is_stable() {
            settled_at = Some(i);
        }
    }

    assert!(offset < 0.0);
    assert!((offset + 120.0).abs() < 1e-9, "offset={offset}");
    assert!(settled_at.is_some_and(|i| i < 300));
    assert_eq!(m.velocity(), 0.0);
}

#[test]
fn velocity_is_clamped_to_scroll_range() {
    let bounds = ScrollBounds::up_to(10_000.0);
    let opts = VelocityOptions::new().with_friction(0.92);

    // At the top, a wheel-up notch cannot move past `min`.
    let mut m = VelocityPhysics::new(opts);
    m.on_scroll(ScrollImpulse::new(120.0));
    let (offset, frames) = run_until_stable(&mut m, 0.0, DT_144, bounds, 300);
    assert_eq!(offset, 0.0);
    assert_eq!(frames, 1);

    // In the middle, the full distance is covered.
    let mut m = VelocityPhysics::new(opts);
    m.on_scroll(ScrollImpulse::new(-120.0));
    let (offset, _) = run_until_stable(&mut m, 5_000.0, DT_144, bounds, 300);
    assert!((offset - 5_120.0).abs() < 1e-9);

    // Near the bottom, the glide stops at `max`.
    let mut m = VelocityPhysics::new(opts);
    m.on_scroll(ScrollImpulse::new(-120.0));
    let (offset, _) = run_until_stable(&mut m, 9_950.0, DT_144, bounds, 300);
    assert_eq!(offset, 10_000.0);
}

#[test]
fn lerp_lands_exactly_on_target() {
    let mut m = LerpPhysics::default();
    let bounds = ScrollBounds::new(0.0, 1_000.0);
    m.on_scroll(ScrollImpulse::precise(20.0).at(100.0, bounds));
    assert_eq!(m.target_offset(), Some(80.0));

    let (offset, frames) = run_until_stable(&mut m, 100.0, DT_144, bounds, 50);
    assert_eq!(offset, 80.0);
    assert!(frames <= 50);
    assert_eq!(m.target_offset(), None);
}

#[test]
fn lerp_target_is_clamped_and_impulses_accumulate() {
    let bounds = ScrollBounds::new(0.0, 1_000.0);

    let mut m = LerpPhysics::default();
    m.on_scroll(ScrollImpulse::precise(500.0).at(100.0, bounds));
    assert_eq!(m.target_offset(), Some(0.0));

    let mut m = LerpPhysics::default();
    m.on_scroll(ScrollImpulse::precise(20.0).at(100.0, bounds));
    let offset = m.update(100.0, DT_144, bounds);
    // The second impulse extends the pending target, not the current offset.
    m.on_scroll(ScrollImpulse::precise(20.0).at(offset, bounds));
    assert_eq!(m.target_offset(), Some(60.0));
    let (offset, _) = run_until_stable(&mut m, offset, DT_144, bounds, 100);
    assert_eq!(offset, 60.0);
}

#[test]
fn lerp_follows_shrinking_range() {
    let mut m = LerpPhysics::default();
    m.on_scroll(ScrollImpulse::precise(-400.0).at(500.0, ScrollBounds::up_to(1_000.0)));
    assert_eq!(m.target_offset(), Some(900.0));

    let (offset, _) = run_until_stable(&mut m, 500.0, DT_144, ScrollBounds::up_to(600.0), 100);
    assert_eq!(offset, 600.0);
}

#[test]
fn exponential_settles_within_one_second() {
    let mut m = ExponentialPhysics::new(
        ExponentialOptions::new()
            .with_decay_rate(8.0)
            .with_stop_threshold(0.5),
    );
    m.on_scroll(ScrollImpulse::new(50.0));

    let offset = run_for(&mut m, 0.0, 1.0 / 60.0, 60);
    assert!(m.remaining_distance().abs() < 0.5);
    assert!(m.is_stable());
    assert!((offset + 50.0).abs() < 1e-9, "offset={offset}");
}

#[test]
fn frame_rate_does_not_change_the_trajectory() {
    // Mid-flight samples agree closely; resting offsets agree within half a unit.
    let fine = 1.0 / 240.0;
    let coarse = 1.0 / 60.0;

    let mut a = VelocityPhysics::default();
    let mut b = VelocityPhysics::default();
    a.on_scroll(ScrollImpulse::new(240.0));
    b.on_scroll(ScrollImpulse::new(240.0));
    let mid_a = run_for(&mut a, 0.0, fine, 60);
    let mid_b = run_for(&mut b, 0.0, coarse, 15);
    assert!((mid_a - mid_b).abs() < 1e-6, "{mid_a} vs {mid_b}");

    for mut pair in [
        pair_of::<VelocityPhysics>(),
        pair_of::<ExponentialPhysics>(),
        pair_of::<LerpPhysics>(),
    ] {
        let bounds = ScrollBounds::up_to(10_000.0);
        for m in pair.iter_mut() {
            m.on_scroll(ScrollImpulse::new(-240.0).at(1_000.0, bounds));
        }
        let end_fine = run_for(pair[0].as_mut(), 1_000.0, fine, 3 * 240);
        let end_coarse = run_for(pair[1].as_mut(), 1_000.0, coarse, 3 * 60);
        assert!(pair[0].is_stable() && pair[1].is_stable());
        assert!(
            (end_fine - end_coarse).abs() <= 0.5,
            "{:?}: {end_fine} vs {end_coarse}",
            pair[0]
        );
    }
}

#[test]
fn stable_models_ignore_updates() {
    for mut m in all_models() {
        assert!(m.is_stable());
        assert_eq!(m.update(123.0, DT_144, ScrollBounds::UNBOUNDED), 123.0);

        m.on_scroll(ScrollImpulse::new(30.0).at(200.0, ScrollBounds::up_to(1_000.0)));
        let bounds = ScrollBounds::up_to(1_000.0);
        let (offset, _) = run_until_stable(m.as_mut(), 200.0, DT_144, bounds, 1_000);
        for _ in 0..10 {
            assert_eq!(m.update(offset, 1.0 / 30.0, ScrollBounds::UNBOUNDED), offset);
            assert!(m.is_stable());
        }
    }
}

#[test]
fn zero_and_invalid_dt_are_no_ops() {
    let mut m = VelocityPhysics::default();
    m.on_scroll(ScrollImpulse::new(0.2));
    assert_eq!(m.update(10.0, 0.0, ScrollBounds::UNBOUNDED), 10.0);
    assert_eq!(m.update(10.0, -1.0, ScrollBounds::UNBOUNDED), 10.0);
    assert_eq!(m.update(10.0, f64::NAN, ScrollBounds::UNBOUNDED), 10.0);
    assert!(!m.is_stable());
    assert_eq!(m.velocity(), -0.2);

    for mut m in all_models() {
        m.on_scroll(ScrollImpulse::new(50.0).at(100.0, ScrollBounds::up_to(1_000.0)));
        assert_eq!(m.update(100.0, 0.0, ScrollBounds::up_to(1_000.0)), 100.0);
        assert!(!m.is_stable());
    }
}

#[test]
fn empty_impulses_do_not_start_motion() {
    for mut m in all_models() {
        m.on_scroll(ScrollImpulse::new(0.0));
        m.on_scroll(ScrollImpulse::new(f64::NAN));
        m.on_scroll(ScrollImpulse::new(f64::INFINITY));
        assert!(m.is_stable(), "{m:?}");
    }
}

#[test]
fn velocity_impulses_accumulate() {
    let travel = |deltas: &[f64]| {
        let mut m = VelocityPhysics::default();
        let mut offset = 0.0;
        for &d in deltas {
            m.on_scroll(ScrollImpulse::new(d));
            offset = m.update(offset, DT_144, ScrollBounds::UNBOUNDED);
        }
        run_until_stable(&mut m, offset, DT_144, ScrollBounds::UNBOUNDED, 2_000).0
    };

    let split = travel(&[60.0, 60.0]);
    let single = travel(&[120.0]);
    assert!((split - single).abs() < 1e-9);
    assert!((split + 120.0).abs() < 1e-9);

    let mut last = 0.0;
    for total in [40.0, 80.0, 160.0, 320.0] {
        let t = travel(&[total / 2.0, total / 2.0]);
        assert!(t < last, "travel must grow with the summed delta");
        last = t;
    }
}

#[test]
fn exponential_impulses_accumulate() {
    let mut m = ExponentialPhysics::default();
    m.on_scroll(ScrollImpulse::new(30.0));
    let offset = m.update(0.0, DT_144, ScrollBounds::UNBOUNDED);
    m.on_scroll(ScrollImpulse::new(30.0));
    let (offset, _) = run_until_stable(&mut m, offset, DT_144, ScrollBounds::UNBOUNDED, 2_000);
    assert!((offset + 60.0).abs() < 1e-9);
}

#[test]
fn precise_mode_uses_snappier_friction() {
    let frames = |precise: bool| {
        let mut m = VelocityPhysics::default();
        m.set_precise_mode(precise);
        assert_eq!(m.is_precise_mode(), precise);
        m.on_scroll(ScrollImpulse::new(200.0));
        run_until_stable(&mut m, 0.0, DT_144, ScrollBounds::UNBOUNDED, 2_000).1
    };
    assert!(frames(true) < frames(false));

    let frames = |precise: bool| {
        let mut m = ExponentialPhysics::default();
        m.set_precise_mode(precise);
        m.on_scroll(ScrollImpulse::new(200.0));
        run_until_stable(&mut m, 0.0, DT_144, ScrollBounds::UNBOUNDED, 2_000).1
    };
    assert!(frames(true) < frames(false));
}

#[test]
fn burst_inputs_gain_extra_velocity() {
    let opts = VelocityOptions::new().with_burst(1.0, 80);

    let mut m = VelocityPhysics::new(opts);
    m.on_scroll(ScrollImpulse::new(120.0).with_interval_ms(Some(20)));
    assert!((m.velocity() + 120.0 * 1.75).abs() < 1e-9);

    let mut m = VelocityPhysics::new(opts);
    m.on_scroll(ScrollImpulse::new(120.0).with_interval_ms(Some(500)));
    assert_eq!(m.velocity(), -120.0);

    let mut m = VelocityPhysics::default();
    m.on_scroll(ScrollImpulse::new(120.0).with_interval_ms(Some(1)));
    assert_eq!(m.velocity(), -120.0);
}

#[test]
fn hybrid_switches_between_momentum_and_seek() {
    let bounds = ScrollBounds::up_to(5_000.0);
    let mut m = HybridPhysics::default();

    m.on_scroll(ScrollImpulse::new(-120.0).at(1_000.0, bounds));
    assert_eq!(m.mode(), MotionMode::Momentum);
    let mut offset = 1_000.0;
    for _ in 0..3 {
        offset = m.update(offset, DT_144, bounds);
    }
    assert!(offset > 1_000.0);
    assert!(m.velocity_model().velocity() != 0.0);

    // Precise input drops the momentum and seeks from where the glide got to.
    m.on_scroll(ScrollImpulse::precise(20.0).at(offset, bounds));
    assert_eq!(m.mode(), MotionMode::Seek);
    assert_eq!(m.velocity_model().velocity(), 0.0);
    let target = offset - 20.0;
    assert_eq!(m.lerp_model().target_offset(), Some(target));
    let (rest, _) = run_until_stable(&mut m, offset, DT_144, bounds, 100);
    assert_eq!(rest, target);

    // A wheel notch mid-seek abandons the target.
    m.on_scroll(ScrollImpulse::precise(100.0).at(rest, bounds));
    let offset = m.update(rest, DT_144, bounds);
    m.on_scroll(ScrollImpulse::new(-120.0).at(offset, bounds));
    assert_eq!(m.mode(), MotionMode::Momentum);
    assert_eq!(m.lerp_model().target_offset(), None);
    let (end, _) = run_until_stable(&mut m, offset, DT_144, bounds, 2_000);
    assert!((end - (offset + 120.0)).abs() < 1e-9);
}

#[test]
fn clone_fresh_copies_tunables_and_drops_motion() {
    let opts = VelocityOptions::new()
        .with_smoothness(0.9)
        .with_velocity_gain(2.0);
    let mut original = VelocityPhysics::new(opts);
    original.on_scroll(ScrollImpulse::new(500.0));
    original.update(0.0, DT_144, ScrollBounds::UNBOUNDED);

    let mut fresh = original.clone_fresh();
    assert!(fresh.is_stable());
    assert!(!original.is_stable());

    let mut reference = VelocityPhysics::new(opts);
    fresh.on_scroll(ScrollImpulse::new(60.0));
    reference.on_scroll(ScrollImpulse::new(60.0));
    let mut a = 0.0;
    let mut b = 0.0;
    for _ in 0..50 {
        a = fresh.update(a, DT_144, ScrollBounds::UNBOUNDED);
        b = reference.update(b, DT_144, ScrollBounds::UNBOUNDED);
        assert_eq!(a, b);
    }

    for mut m in all_models() {
        m.set_precise_mode(true);
        m.on_scroll(ScrollImpulse::new(80.0).at(500.0, ScrollBounds::up_to(1_000.0)));
        let fresh = m.clone_fresh();
        assert!(fresh.is_stable());
        assert!(!fresh.is_precise_mode(), "{m:?}");
        m.reset();
        assert!(m.is_stable());
    }
}

#[test]
fn out_of_range_options_are_clamped() {
    let m = VelocityPhysics::new(
        VelocityOptions::new()
            .with_smoothness(3.0)
            .with_precise_smoothness(-1.0)
            .with_velocity_gain(0.0)
            .with_stop_velocity(f64::NAN),
    );
    assert_eq!(m.options().smoothness, 1.0);
    assert_eq!(m.options().friction(), MAX_FRICTION);
    assert_eq!(m.options().precise_friction(), MIN_FRICTION);
    assert_eq!(m.options().velocity_gain, 0.1);
    assert_eq!(m.options().stop_velocity, 0.5);

    assert_eq!(VelocityOptions::new().with_friction(0.5).smoothness, 0.0);
    assert_eq!(VelocityOptions::new().with_friction(0.99).friction(), MAX_FRICTION);

    let m = ExponentialPhysics::new(
        ExponentialOptions::new()
            .with_decay_rate(-5.0)
            .with_stop_threshold(100.0),
    );
    assert_eq!(m.options().decay_rate, 1.0);
    assert_eq!(m.options().stop_threshold, 5.0);

    let m = LerpPhysics::new(LerpOptions::new().with_lerp_factor(f64::NAN).with_epsilon(0.0));
    assert_eq!(m.options().lerp_factor, 0.5);
    assert_eq!(m.options().epsilon, 0.01);
}

#[test]
fn bounds_repair_and_clamp() {
    let b = ScrollBounds::new(10.0, 5.0);
    assert_eq!((b.min, b.max), (10.0, 10.0));
    assert_eq!(b.extent(), 0.0);

    let b = ScrollBounds::up_to(100.0);
    assert_eq!(b.clamp(-3.0), 0.0);
    assert_eq!(b.clamp(300.0), 100.0);
    assert_eq!(b.clamp(f64::NAN), 0.0);
    assert_eq!(b.clamp(42.5), 42.5);
    assert!(ScrollBounds::UNBOUNDED.contains(-1e300));
}

#[test]
fn huge_dt_and_delta_stay_in_bounds() {
    let bounds = ScrollBounds::up_to(2_000.0);
    for mut m in all_models() {
        m.on_scroll(ScrollImpulse::new(-1e9).at(1_000.0, bounds));
        let offset = m.update(1_000.0, 10.0, bounds);
        assert!(bounds.contains(offset), "{m:?}: {offset}");
        let (rest, _) = run_until_stable(m.as_mut(), offset, 10.0, bounds, 10);
        assert_eq!(rest, 2_000.0);
    }
}

#[test]
fn randomized_inputs_converge_inside_bounds() {
    let mut rng = Lcg::new(0x5eed_cafe);
    for _ in 0..200 {
        let bounds = ScrollBounds::up_to(rng.gen_f64(100.0, 20_000.0));
        let mut models: Vec<Box<dyn ScrollPhysics>> = vec![
            Box::new(VelocityPhysics::new(
                VelocityOptions::new().with_friction(rng.gen_f64(MIN_FRICTION, MAX_FRICTION)),
            )),
            Box::new(LerpPhysics::new(
                LerpOptions::new().with_lerp_factor(rng.gen_f64(0.05, 1.0)),
            )),
            Box::new(ExponentialPhysics::new(
                ExponentialOptions::new().with_decay_rate(rng.gen_f64(1.0, 20.0)),
            )),
            Box::new(HybridPhysics::default()),
        ];

        for m in models.iter_mut() {
            let mut offset = rng.gen_f64(bounds.min, bounds.max);
            let impulses = 1 + (rng.next_u64() % 4) as usize;
            for _ in 0..impulses {
                let precise = rng.gen_bool();
                m.set_precise_mode(precise);
                m.on_scroll(
                    ScrollImpulse::new(rng.gen_f64(-2_000.0, 2_000.0))
                        .with_precise(precise)
                        .at(offset, bounds),
                );
                offset = m.update(offset, rng.gen_f64(1.0 / 240.0, 1.0 / 20.0), bounds);
                assert!(bounds.contains(offset));
            }
            let dt = rng.gen_f64(1.0 / 240.0, 1.0 / 20.0);
            run_until_stable(m.as_mut(), offset, dt, bounds, 10_000);
        }
    }
}
