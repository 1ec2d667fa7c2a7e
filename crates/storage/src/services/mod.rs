pub mod goal_progress;
pub mod measurement_changes;
pub mod workout_calendar;
