use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the collision counter.
///
/// Running out of collisions is not an error: it is reported through
/// [`StepOutcome::Terminated`](crate::core::StepOutcome::Terminated).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid object or configuration parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Numerical issue, e.g. a non-finite time to the next event.
    #[error("numerical error: {0}")]
    MathError(String),

    /// The run used up its event budget before the objects separated for good.
    #[error("iteration bound exceeded: no termination after {bound} events")]
    IterationBoundExceeded { bound: u64 },

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Propagated I/O errors (reading a configuration file).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
