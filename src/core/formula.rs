//! Closed-form 1D elastic collision.

/// Velocities after an elastic collision of masses `m1`, `m2` moving at `v1`, `v2`.
///
/// This is the non-trivial solution of momentum and kinetic-energy conservation;
/// the identity solution (nothing happened) is excluded. Both masses must be > 0.
/// Equal masses exchange their velocities exactly.
#[inline]
pub fn elastic_collision(m1: f64, m2: f64, v1: f64, v2: f64) -> (f64, f64) {
    // Exact exchange; the general form rounds.
    if m1 == m2 {
        return (v2, v1);
    }
    let total = m1 + m2;
    let v1_out = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_out = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    (v1_out, v2_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_masses_swap_velocities() {
        let (a, b) = elastic_collision(3.0, 3.0, 1.25, -0.5);
        assert_eq!(a, -0.5);
        assert_eq!(b, 1.25);
    }

    #[test]
    fn light_object_bounces_off_heavy_one() {
        // Nearly a wall: the light object reverses, the heavy one barely changes.
        let (a, b) = elastic_collision(1.0, 1e12, 1.0, 0.0);
        assert!((a + 1.0).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn equal_velocities_are_a_fixed_point() {
        let (a, b) = elastic_collision(1.0, 7.0, 2.0, 2.0);
        assert!((a - 2.0).abs() < 1e-12);
        assert!((b - 2.0).abs() < 1e-12);
    }
}
