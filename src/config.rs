//! Run configuration.
//!
//! The classic setup is fully determined by the exponent `n`: a unit mass at
//! rest 5 units from the wall and a mass of `100^n` approaching it from 10
//! units out. Every value can be overridden, either in code, from the command
//! line or from a YAML file.

use crate::core::MovingObject;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exponent used when nothing else is given.
pub const DEFAULT_EXPONENT: u32 = 5;

/// Events allowed per power of ten of the mass-ratio square root.
const BOUND_FACTOR: f64 = 3.2;

/// Initial state of one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectParams {
    pub velocity: f64,
    pub position: f64,
    pub mass: f64,
}

impl ObjectParams {
    /// Build the validated object.
    pub fn build(&self) -> Result<MovingObject> {
        MovingObject::new(self.velocity, self.position, self.mass)
    }
}

/// Parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Object next to the wall.
    pub object1: ObjectParams,
    /// Object further out.
    pub object2: ObjectParams,
    /// Maximum number of events before the run is declared non-terminating.
    pub max_events: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::classic(10f64.powi(DEFAULT_EXPONENT as i32))
    }
}

impl SimConfig {
    /// The classic setup for mass ratio `100^n`.
    ///
    /// The event budget is `floor(3.2 * 10^n)`, enough for the `floor(pi * 10^n)`
    /// events the run is expected to take.
    ///
    /// Errors: `Error::InvalidParam` if `100^n` does not fit in an `f64`.
    pub fn from_exponent(n: u32) -> Result<Self> {
        let scale = i32::try_from(n)
            .ok()
            .map(|k| 10f64.powi(k))
            .filter(|scale| (scale * scale).is_finite())
            .ok_or_else(|| {
                Error::InvalidParam(format!("exponent {n} too large: 100^{n} overflows f64"))
            })?;
        Ok(Self::classic(scale))
    }

    /// Classic setup with object 2 weighing `scale^2`.
    fn classic(scale: f64) -> Self {
        Self {
            object1: ObjectParams {
                velocity: 0.0,
                position: 5.0,
                mass: 1.0,
            },
            object2: ObjectParams {
                velocity: -1.0,
                position: 10.0,
                mass: scale * scale,
            },
            max_events: (BOUND_FACTOR * scale) as u64,
        }
    }

    /// Check the configuration and build the initial pair of objects.
    ///
    /// Errors: `Error::InvalidParam` if an object is invalid, object 1 starts
    /// behind the wall, the objects are out of order, or the budget is zero.
    pub fn objects(&self) -> Result<(MovingObject, MovingObject)> {
        let o1 = self.object1.build()?;
        let o2 = self.object2.build()?;
        if o1.position < 0.0 {
            return Err(Error::InvalidParam(
                "object 1 must not start behind the wall (position >= 0)".into(),
            ));
        }
        if o1.position > o2.position {
            return Err(Error::InvalidParam(
                "object 1 must start between the wall and object 2".into(),
            ));
        }
        if self.max_events == 0 {
            return Err(Error::InvalidParam("max_events must be > 0".into()));
        }
        Ok((o1, o2))
    }

    /// Parse a YAML document; see [`ConfigFile`] for the accepted keys.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(s)?;
        file.resolve()
    }

    /// Read and parse a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// On-disk configuration: every key is optional and falls back to the classic
/// setup for `exponent`.
///
/// ```yaml
/// exponent: 3
/// object2:
///   velocity: -2.0
///   position: 10.0
///   mass: 1.0e6
/// max_events: 5000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub exponent: Option<u32>,
    pub object1: Option<ObjectParams>,
    pub object2: Option<ObjectParams>,
    pub max_events: Option<u64>,
}

impl ConfigFile {
    /// Fill the gaps from the classic setup.
    pub fn resolve(self) -> Result<SimConfig> {
        let base = SimConfig::from_exponent(self.exponent.unwrap_or(DEFAULT_EXPONENT))?;
        Ok(SimConfig {
            object1: self.object1.unwrap_or(base.object1),
            object2: self.object2.unwrap_or(base.object2),
            max_events: self.max_events.unwrap_or(base.max_events),
        })
    }
}
