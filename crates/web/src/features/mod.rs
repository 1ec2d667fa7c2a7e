pub mod calculators;
pub mod exercises;
pub mod goals;
pub mod health;
pub mod measurements;
pub mod workouts;
