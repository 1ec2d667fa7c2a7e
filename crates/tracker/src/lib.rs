pub mod calculators;
pub mod calories;
pub mod catalog;
pub mod client;
pub mod command;
pub mod document;
pub mod driver;
pub mod error;
pub mod session;
pub mod timer;
pub mod traits;

pub use catalog::{MetTable, MuscleGroup};
pub use client::WorkoutsClient;
pub use command::SessionAction;
pub use document::{PersistedWorkout, WorkoutDocument};
pub use driver::{SessionDriver, SessionHandle, SessionOutcome};
pub use error::{Result, SessionError, TrackerError};
pub use session::{ExerciseId, ExerciseKind, SetField, SetId, WorkoutSession};
pub use timer::SessionTimer;
pub use traits::WorkoutStore;
