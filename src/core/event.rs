use crate::core::MovingObject;
use crate::error::{Error, Result};
use ordered_float::NotNan;
use std::fmt;

/// Kinds of events the two-object system can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Object 1 bounces off the wall at position 0.
    Wall,
    /// Object 1 and object 2 collide with each other.
    Collision,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Wall => f.pad("wall"),
            EventKind::Collision => f.pad("collision"),
        }
    }
}

/// A realized event.
///
/// - `dt`: time elapsed since the previous state (finite, non-negative).
/// - `kind`: what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub dt: NotNan<f64>,
    pub kind: EventKind,
}

impl Event {
    /// Create a new event, validating that `dt` is finite and not negative.
    pub fn new(dt: f64, kind: EventKind) -> Result<Self> {
        let dt = NotNan::new(dt).map_err(|_| Error::MathError(format!("{kind} time is NaN")))?;
        if !dt.is_finite() {
            return Err(Error::MathError(format!(
                "{kind} time is not finite; the objects never meet"
            )));
        }
        if *dt < 0.0 {
            return Err(Error::MathError(format!("{kind} time {dt} is negative")));
        }
        Ok(Self { dt, kind })
    }

    /// Returns the raw f64 time since the previous state.
    #[inline]
    pub fn dt_f64(&self) -> f64 {
        self.dt.into_inner()
    }
}

/// Result of asking for the next event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// An event happened; carries the new pair of objects.
    Advanced {
        o1: MovingObject,
        o2: MovingObject,
        event: Event,
    },
    /// No further event is possible.
    Terminated,
}
