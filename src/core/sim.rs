use crate::config::SimConfig;
use crate::core::formula::elastic_collision;
use crate::core::{Event, EventKind, MovingObject, StepOutcome};
use crate::error::{Error, Result};
use log::{debug, info, trace, warn};
use std::fmt;

/// Work out the next event for the pair `(o1, o2)` and play it.
///
/// Object 1 sits between the wall (position 0) and object 2. Only the
/// velocities decide what happens next:
/// - `0 <= v1 < v2`: the objects separate for good, [`StepOutcome::Terminated`].
/// - `v1 < 0`: object 1 reaches the wall and bounces back.
/// - otherwise the objects converge and collide elastically.
///
/// Comparisons are exact; no tolerance is applied.
pub fn next_event(o1: MovingObject, o2: MovingObject) -> Result<StepOutcome> {
    if o1.velocity >= 0.0 && o1.velocity < o2.velocity {
        return Ok(StepOutcome::Terminated);
    }

    if o1.velocity < 0.0 {
        let event = Event::new(-o1.position / o1.velocity, EventKind::Wall)?;
        let (o1, o2) = advance_pair(o1, o2, event.dt_f64());
        // Snap to the wall and reflect.
        let o1 = MovingObject {
            velocity: -o1.velocity,
            position: 0.0,
            ..o1
        };
        return Ok(StepOutcome::Advanced { o1, o2, event });
    }

    // Rounding can leave object 2 a hair behind object 1.
    let gap = (o2.position - o1.position).max(0.0);
    let event = Event::new(gap / (o1.velocity - o2.velocity), EventKind::Collision)?;
    let (o1, o2) = advance_pair(o1, o2, event.dt_f64());
    let (o1, o2) = resolve_collision(o1, o2);
    Ok(StepOutcome::Advanced { o1, o2, event })
}

/// Move both objects freely for `dt`.
#[inline]
fn advance_pair(o1: MovingObject, o2: MovingObject, dt: f64) -> (MovingObject, MovingObject) {
    (o1.advanced(dt), o2.advanced(dt))
}

/// Exchange momentum between two touching objects; both end at object 1's position.
fn resolve_collision(o1: MovingObject, o2: MovingObject) -> (MovingObject, MovingObject) {
    let (v1, v2) = elastic_collision(o1.mass, o2.mass, o1.velocity, o2.velocity);
    let contact = o1.position;
    (
        o1.with_velocity(v1),
        MovingObject {
            velocity: v2,
            position: contact,
            ..o2
        },
    )
}

/// Summary of a run that reached termination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Total events: wall bounces plus object-object collisions.
    pub collisions: u64,
    pub wall_bounces: u64,
    pub object_collisions: u64,
    /// Simulated time from the initial state to the last event.
    pub elapsed: f64,
    /// Final state of object 1.
    pub o1: MovingObject,
    /// Final state of object 2.
    pub o2: MovingObject,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No more collisions at {}", self.collisions)
    }
}

/// Two objects and a wall, played event by event.
#[derive(Debug)]
pub struct Simulation {
    o1: MovingObject,
    o2: MovingObject,
    time_now: f64,
    events: u64,
    wall_bounces: u64,
    max_events: u64,
    terminated: bool,
    history: Option<Vec<Event>>,
}

impl Simulation {
    /// Create a simulation from a validated configuration.
    pub fn new(config: &SimConfig) -> Result<Self> {
        let (o1, o2) = config.objects()?;
        Ok(Self {
            o1,
            o2,
            time_now: 0.0,
            events: 0,
            wall_bounces: 0,
            max_events: config.max_events,
            terminated: false,
            history: None,
        })
    }

    /// Keep every realized event, retrievable through [`Simulation::history`].
    pub fn record_history(mut self) -> Self {
        self.history.get_or_insert_with(Vec::new);
        self
    }

    /// Current simulated time.
    pub fn time(&self) -> f64 {
        self.time_now
    }

    /// Number of events realized so far.
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Event budget.
    pub fn max_events(&self) -> u64 {
        self.max_events
    }

    /// Current pair of objects.
    pub fn objects(&self) -> (MovingObject, MovingObject) {
        (self.o1, self.o2)
    }

    /// Whether no further event is possible.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Realized events in order; empty unless history recording is on.
    pub fn history(&self) -> &[Event] {
        self.history.as_deref().unwrap_or(&[])
    }

    /// Total kinetic energy (diagnostic).
    pub fn kinetic_energy(&self) -> f64 {
        self.o1.kinetic_energy() + self.o2.kinetic_energy()
    }

    /// Total momentum (diagnostic; not conserved across wall bounces).
    pub fn momentum(&self) -> f64 {
        self.o1.momentum() + self.o2.momentum()
    }

    /// Play the next event.
    ///
    /// Errors: `Error::IterationBoundExceeded` if the event would go past the
    /// budget; `Error::MathError` if the next event time is not finite.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.terminated {
            return Ok(StepOutcome::Terminated);
        }
        let outcome = next_event(self.o1, self.o2)?;
        match outcome {
            StepOutcome::Terminated => {
                self.terminated = true;
            }
            StepOutcome::Advanced { o1, o2, event } => {
                if self.events >= self.max_events {
                    warn!(
                        "Event budget of {} used up at t={}",
                        self.max_events, self.time_now
                    );
                    return Err(Error::IterationBoundExceeded {
                        bound: self.max_events,
                    });
                }
                self.o1 = o1;
                self.o2 = o2;
                self.time_now += event.dt_f64();
                self.events += 1;
                if event.kind == EventKind::Wall {
                    self.wall_bounces += 1;
                }
                trace!(
                    "#{} {} at t={}: v1={}, v2={}",
                    self.events,
                    event.kind,
                    self.time_now,
                    o1.velocity,
                    o2.velocity
                );
                if let Some(history) = self.history.as_mut() {
                    history.push(event);
                }
            }
        }
        Ok(outcome)
    }

    /// Play events until the objects separate for good.
    pub fn run(&mut self) -> Result<Report> {
        debug!(
            "Starting run: m1={}, m2={}, budget={}",
            self.o1.mass, self.o2.mass, self.max_events
        );
        while let StepOutcome::Advanced { .. } = self.step()? {}
        let report = self.report();
        info!(
            "Terminated after {} events ({} wall, {} object) at t={}",
            report.collisions, report.wall_bounces, report.object_collisions, report.elapsed
        );
        Ok(report)
    }

    /// Snapshot of the counters and the current pair.
    pub fn report(&self) -> Report {
        Report {
            collisions: self.events,
            wall_bounces: self.wall_bounces,
            object_collisions: self.events - self.wall_bounces,
            elapsed: self.time_now,
            o1: self.o1,
            o2: self.o2,
        }
    }
}

/// Run the configured setup to termination.
pub fn count_collisions(config: &SimConfig) -> Result<Report> {
    Simulation::new(config)?.run()
}
