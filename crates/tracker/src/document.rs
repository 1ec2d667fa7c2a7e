use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::MuscleGroup;
use crate::session::ExerciseKind;

/// Flat workout document accepted by `POST /api/workouts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDocument {
    pub name: String,
    pub date: NaiveDate,
    /// Seconds of active (unpaused) time.
    pub duration: u64,
    pub rest_time: u32,
    pub exercises: Vec<ExerciseDocument>,
    pub calories_burned: u32,
    pub is_draft: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    pub sets: Vec<SetDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetDocument {
    pub weight: f64,
    pub reps: u32,
    #[serde(default)]
    pub drops: Vec<DropDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropDocument {
    pub weight: f64,
    pub reps: u32,
}

/// A document as returned by the API after it has been stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersistedWorkout {
    pub id: String,
    #[serde(flatten)]
    pub document: WorkoutDocument,
}

/// Entry of `GET /api/exercises`: built-ins and the caller's custom exercises.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInfo {
    pub name: String,
    #[serde(default)]
    pub muscle_group: MuscleGroup,
    #[serde(default = "default_met")]
    pub met_value: f64,
    #[serde(default)]
    pub is_custom: bool,
}

fn default_met() -> f64 {
    crate::catalog::DEFAULT_MET
}
