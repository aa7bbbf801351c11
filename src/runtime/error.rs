//! Error types for the taskgate runtime.

use std::fmt;

/// Errors surfaced by the runtime.
///
/// User-initiated cancellation is not an error; it is an expected terminal
/// outcome reported through `RunOutcome`.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskError {
    /// The stand-in work (or its delay) for one step failed.
    WorkFailed { message: String },
    /// An event sink could not serialize or write an event.
    SinkError { sink: String, message: String },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::WorkFailed { message } => {
                write!(f, "step work failed: {}", message)
            }
            TaskError::SinkError { sink, message } => {
                write!(f, "event sink {} failed: {}", sink, message)
            }
        }
    }
}

impl std::error::Error for TaskError {}

/// Result alias used throughout the runtime.
pub type TaskResult<T> = Result<T, TaskError>;
