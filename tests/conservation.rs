use approx::assert_relative_eq;
use pisim::core::{elastic_collision, next_event, EventKind, MovingObject, StepOutcome};
use pisim::error::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Momentum and kinetic energy survive the collision formula for random inputs.
#[test]
fn formula_conserves_momentum_and_energy() {
    let mut rng = StdRng::seed_from_u64(31415);
    for _ in 0..10_000 {
        let m1: f64 = rng.random_range(1e-3..1e3);
        let m2: f64 = rng.random_range(1e-3..1e3);
        let v1: f64 = rng.random_range(-10.0..10.0);
        let v2: f64 = rng.random_range(-10.0..10.0);
        let (u1, u2) = elastic_collision(m1, m2, v1, v2);

        let p_scale = m1 * v1.abs() + m2 * v2.abs();
        assert!(
            (m1 * v1 + m2 * v2 - (m1 * u1 + m2 * u2)).abs() <= 1e-12 * p_scale,
            "momentum changed for m=({m1}, {m2}), v=({v1}, {v2})"
        );
        let e0 = 0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2;
        let e1 = 0.5 * m1 * u1 * u1 + 0.5 * m2 * u2 * u2;
        assert_relative_eq!(e0, e1, max_relative = 1e-10, epsilon = 1e-12);
    }
}

/// The formula never returns its input unless the velocities already agree.
#[test]
fn formula_is_non_trivial() {
    let mut rng = StdRng::seed_from_u64(2718);
    for _ in 0..10_000 {
        let m1: f64 = rng.random_range(1e-3..1e3);
        let m2: f64 = rng.random_range(1e-3..1e3);
        let v1: f64 = rng.random_range(-10.0..10.0);
        let v2: f64 = rng.random_range(-10.0..10.0);
        if v1 == v2 {
            continue;
        }
        assert_ne!(elastic_collision(m1, m2, v1, v2), (v1, v2));
    }
}

/// Equal masses exchange their velocities exactly.
#[test]
fn equal_masses_exchange_velocities() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let m: f64 = rng.random_range(1e-3..1e3);
        let v1: f64 = rng.random_range(-10.0..10.0);
        let v2: f64 = rng.random_range(-10.0..10.0);
        assert_eq!(elastic_collision(m, m, v1, v2), (v2, v1));
    }
}

/// A wall bounce leaves object 1 at the wall moving away from it.
#[test]
fn wall_bounce_flips_sign() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let x1: f64 = rng.random_range(0.0..10.0);
        let v1: f64 = rng.random_range(-5.0..-1e-3);
        let o1 = MovingObject::new(v1, x1, 1.0)?;
        let o2 = MovingObject::new(rng.random_range(-1.0..1.0), x1 + 1.0, 50.0)?;
        let StepOutcome::Advanced { o1: a, o2: b, event } = next_event(o1, o2)? else {
            panic!("object 1 moving toward the wall must bounce");
        };
        assert_eq!(event.kind, EventKind::Wall);
        assert!(a.position >= 0.0);
        assert!(a.velocity > 0.0);
        assert_eq!(a.velocity, -v1);
        assert_eq!(b.velocity, o2.velocity);
        assert_eq!(b.mass, o2.mass);
    }
    Ok(())
}

/// A collision step meets at one point and keeps momentum and energy.
#[test]
fn collision_step_conserves() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..1_000 {
        let v1: f64 = rng.random_range(0.0..5.0);
        let v2: f64 = rng.random_range(-5.0..v1 - 1e-3);
        let o1 = MovingObject::new(
            v1,
            rng.random_range(0.0..5.0),
            rng.random_range(0.1..10.0),
        )?;
        let gap: f64 = rng.random_range(0.0..5.0);
        let o2 = MovingObject::new(
            v2,
            o1.position + gap,
            rng.random_range(0.1..10.0),
        )?;
        let StepOutcome::Advanced { o1: a, o2: b, event } = next_event(o1, o2)? else {
            panic!("converging objects must collide");
        };
        assert_eq!(event.kind, EventKind::Collision);
        assert_eq!(a.position, b.position);
        assert_relative_eq!(
            a.momentum() + b.momentum(),
            o1.momentum() + o2.momentum(),
            max_relative = 1e-10,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            a.kinetic_energy() + b.kinetic_energy(),
            o1.kinetic_energy() + o2.kinetic_energy(),
            max_relative = 1e-10,
            epsilon = 1e-12
        );
    }
    Ok(())
}
