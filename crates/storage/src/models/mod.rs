mod exercise;
mod goal;
mod measurement;
mod measurement_field;
mod workout;

pub use exercise::{CustomExercise, MuscleGroup};
pub use goal::{Goal, GoalCategory};
pub use measurement::{BodyMeasurement, ProgressPhoto, WeightEntry};
pub use measurement_field::BodyMeasurementField;
pub use workout::{ExerciseType, SetDrop, Workout, WorkoutExercise, WorkoutSet};
