use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    #[default]
    Normal,
    Dropset,
}

/// A lighter follow-up run inside a dropset set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SetDrop {
    #[validate(range(min = 0.0, message = "Weight cannot be negative"))]
    pub weight: f64,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutSet {
    #[validate(range(min = 0.0, message = "Weight cannot be negative"))]
    pub weight: f64,
    pub reps: u32,
    #[serde(default)]
    #[validate(nested)]
    pub drops: Vec<SetDrop>,
}

/// One exercise as stored inside the `workouts.exercises` JSONB column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutExercise {
    #[validate(length(max = 255, message = "Exercise name is too long"))]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ExerciseType,
    #[serde(default)]
    #[validate(nested)]
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub rest_time: i32,
    pub exercises: Json<Vec<WorkoutExercise>>,
    pub calories_burned: i32,
    pub is_draft: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exercise_defaults_when_fields_missing() {
        let exercise: WorkoutExercise = serde_json::from_value(json!({"name": "Подтягивания"})).unwrap();
        assert_eq!(exercise.kind, ExerciseType::Normal);
        assert!(exercise.sets.is_empty());
    }

    #[test]
    fn test_negative_drop_weight_is_rejected() {
        let exercise: WorkoutExercise = serde_json::from_value(json!({
            "name": "Жим лежа",
            "type": "dropset",
            "sets": [{"weight": 80.0, "reps": 8, "drops": [{"weight": -5.0, "reps": 6}]}]
        }))
        .unwrap();
        assert!(exercise.validate().is_err());
    }
}
