//! # pisim
//!
//! Counts the collisions of two blocks sliding on a frictionless line next to
//! a wall. With a mass ratio of `100^n` the count spells out the first `n + 1`
//! digits of pi.
//!
//! ```no_run
//! use pisim::{config::SimConfig, core::count_collisions};
//!
//! let report = count_collisions(&SimConfig::from_exponent(2)?)?;
//! assert_eq!(report.collisions, 314);
//! # Ok::<(), pisim::error::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::SimConfig;
pub use crate::core::{Report, Simulation};
pub use crate::error::{Error, Result};
