use crate::error::{Error, Result};

/// A point mass moving along the line.
///
/// Fields:
/// - `velocity`: signed speed along the line
/// - `position`: coordinate on the line; the wall sits at 0
/// - `mass`: mass (> 0), fixed for the object's lifetime
///
/// Values are `Copy`: every event produces a fresh pair of objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingObject {
    /// Velocity (positive points away from the wall).
    pub velocity: f64,
    /// Position; distance from the wall for the object nearest to it.
    pub position: f64,
    /// Mass (> 0).
    pub mass: f64,
}

impl MovingObject {
    /// Create a new object after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `mass` is non-positive or any value is NaN/inf.
    pub fn new(velocity: f64, position: f64, mass: f64) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !position.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !velocity.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            velocity,
            position,
            mass,
        })
    }

    /// The object after moving freely for `dt`.
    #[inline]
    pub fn advanced(self, dt: f64) -> Self {
        Self {
            position: self.position + self.velocity * dt,
            ..self
        }
    }

    /// The same object with its velocity replaced.
    #[inline]
    pub fn with_velocity(self, velocity: f64) -> Self {
        Self { velocity, ..self }
    }

    /// Kinetic energy: 1/2 m v^2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }

    /// Linear momentum: m v.
    #[inline]
    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }
}
