use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Workout, WorkoutExercise};

/// A stored workout, in the same camelCase shape clients post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    /// Active seconds
    pub duration: i32,
    pub rest_time: i32,
    pub exercises: Vec<WorkoutExercise>,
    pub calories_burned: i32,
    pub is_draft: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            name: workout.name,
            date: workout.date,
            duration: workout.duration,
            rest_time: workout.rest_time,
            exercises: workout.exercises.0,
            calories_burned: workout.calories_burned,
            is_draft: workout.is_draft,
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

/// Row of the recent-workouts widget.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub duration: i32,
    pub exercise_count: i32,
}

/// Totals over non-draft workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_exercises: i64,
    pub total_duration: i64,
    pub total_calories: i64,
}

fn default_rest_time() -> i32 {
    90
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Workout name must be between 1 and 255 characters"
    ))]
    pub name: String,

    /// Defaults to today
    pub date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: i32,

    #[serde(default = "default_rest_time")]
    #[validate(range(min = 0, message = "Rest time cannot be negative"))]
    pub rest_time: i32,

    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<WorkoutExercise>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Calories cannot be negative"))]
    pub calories_burned: i32,

    #[serde(default)]
    pub is_draft: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(range(min = 0))]
    pub rest_time: Option<i32>,

    #[validate(nested)]
    pub exercises: Option<Vec<WorkoutExercise>>,

    #[validate(range(min = 0))]
    pub calories_burned: Option<i32>,

    pub is_draft: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentQuery {
    /// Number of workouts, 5 when absent
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    pub year: i32,
    /// 1-12
    pub month: u32,
}
