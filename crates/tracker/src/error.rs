use thiserror::Error;

use crate::session::{ExerciseId, SetId};

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("{message}")]
    ApiError { status: u16, message: String },

    #[error(transparent)]
    SessionError(#[from] SessionError),

    #[error("Session driver stopped")]
    DriverStopped,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No exercise with id {0}")]
    UnknownExercise(ExerciseId),

    #[error("No set with id {0}")]
    UnknownSet(SetId),

    #[error("Set {set} has no drop #{index}")]
    UnknownDrop { set: SetId, index: usize },

    #[error("Exercise {0} must keep at least one set")]
    LastSet(ExerciseId),
}
