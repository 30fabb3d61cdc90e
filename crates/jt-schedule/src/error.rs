use jt_core::{EntityId, JtError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Invalid spread/probability or run configuration.
    #[error(transparent)]
    Core(#[from] JtError),

    #[error("{0} has an empty schedule")]
    EmptySchedule(EntityId),

    #[error("{id} did not reach the horizon of {horizon_ms} ms within {steps} steps")]
    HorizonNotReached {
        id:         EntityId,
        horizon_ms: f64,
        steps:      usize,
    },

    #[error("schedule parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
