//! Two point masses on a line next to a wall, played event by event.
//!
//! - `object`: the point-mass state
//! - `formula`: closed-form elastic collision
//! - `event`: realized events and the per-step outcome
//! - `sim`: the event loop and its bookkeeping

pub mod event;
pub mod formula;
pub mod object;
pub mod sim;

pub use event::{Event, EventKind, StepOutcome};
pub use formula::elastic_collision;
pub use object::MovingObject;
pub use sim::{count_collisions, next_event, Report, Simulation};
