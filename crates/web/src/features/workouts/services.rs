use sqlx::PgPool;
use storage::{
    dto::{
        common::{PaginatedResponse, PaginationParams},
        workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutStats, WorkoutSummary},
    },
    error::Result,
    models::Workout,
    repository::workout::WorkoutRepository,
    services::workout_calendar::{month_bounds, recent_limit},
};
use uuid::Uuid;

/// One page of the user's workouts, newest first
pub async fn list_workouts(
    pool: &PgPool,
    user_id: Uuid,
    params: &PaginationParams,
) -> Result<PaginatedResponse<Workout>> {
    let repo = WorkoutRepository::new(pool);
    let (workouts, total) = repo.list(user_id, params).await?;
    Ok(PaginatedResponse::new(workouts, params, total))
}

/// Latest finished workouts for the dashboard
pub async fn recent_workouts(
    pool: &PgPool,
    user_id: Uuid,
    limit: Option<i64>,
) -> Result<Vec<WorkoutSummary>> {
    let repo = WorkoutRepository::new(pool);
    repo.recent(user_id, recent_limit(limit)).await
}

pub async fn get_workout(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.find_by_id(user_id, id).await
}

pub async fn create_workout(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateWorkoutRequest,
) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo.create(user_id, request).await?;
    tracing::info!(
        "Workout {} saved (draft: {}, {} exercises)",
        workout.id,
        workout.is_draft,
        workout.exercises.0.len()
    );
    Ok(workout)
}

pub async fn update_workout(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &UpdateWorkoutRequest,
) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    let existing = repo.find_by_id(user_id, id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_workout(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.delete(user_id, id).await
}

pub async fn workout_stats(pool: &PgPool, user_id: Uuid) -> Result<WorkoutStats> {
    let repo = WorkoutRepository::new(pool);
    repo.stats(user_id).await
}

/// Finished workouts within one calendar month
pub async fn workouts_in_month(
    pool: &PgPool,
    user_id: Uuid,
    year: i32,
    month: u32,
) -> Result<Vec<Workout>> {
    let (from, to) = month_bounds(year, month)?;
    let repo = WorkoutRepository::new(pool);
    repo.in_range(user_id, from, to).await
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use storage::dto::workout::WorkoutResponse;
    use storage::models::{ExerciseType, SetDrop, WorkoutExercise, WorkoutSet};
    use tracker::document::{DropDocument, ExerciseDocument, SetDocument, WorkoutDocument};
    use tracker::{ExerciseKind, PersistedWorkout};
    use validator::Validate;

    use super::*;

    fn dropset_document() -> WorkoutDocument {
        WorkoutDocument {
            name: "Руки".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            duration: 2400,
            rest_time: 60,
            exercises: vec![ExerciseDocument {
                name: "Подъём на бицепс".to_string(),
                kind: ExerciseKind::Dropset,
                sets: vec![SetDocument {
                    weight: 20.0,
                    reps: 10,
                    drops: vec![
                        DropDocument { weight: 15.0, reps: 8 },
                        DropDocument { weight: 10.0, reps: 6 },
                    ],
                }],
            }],
            calories_burned: 180,
            is_draft: false,
        }
    }

    #[test]
    fn test_session_document_is_accepted_as_create_request() {
        let body = serde_json::to_value(dropset_document()).unwrap();
        let request: CreateWorkoutRequest = serde_json::from_value(body).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.duration, 2400);
        assert_eq!(request.rest_time, 60);
        assert_eq!(request.calories_burned, 180);

        let exercise = &request.exercises[0];
        assert_eq!(exercise.kind, ExerciseType::Dropset);
        assert_eq!(
            exercise.sets[0].drops,
            vec![
                SetDrop { weight: 15.0, reps: 8 },
                SetDrop { weight: 10.0, reps: 6 },
            ]
        );
    }

    #[test]
    fn test_stored_workout_reads_back_as_session_document() {
        let stamp = NaiveDateTime::parse_from_str("2026-02-14 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let response = WorkoutResponse {
            id: Uuid::new_v4(),
            name: "Руки".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            duration: 2400,
            rest_time: 60,
            exercises: vec![WorkoutExercise {
                name: "Подъём на бицепс".to_string(),
                kind: ExerciseType::Dropset,
                sets: vec![WorkoutSet {
                    weight: 20.0,
                    reps: 10,
                    drops: vec![
                        SetDrop { weight: 15.0, reps: 8 },
                        SetDrop { weight: 10.0, reps: 6 },
                    ],
                }],
            }],
            calories_burned: 180,
            is_draft: false,
            created_at: stamp,
            updated_at: stamp,
        };

        let body = serde_json::to_value(&response).unwrap();
        let persisted: PersistedWorkout = serde_json::from_value(body).unwrap();

        assert_eq!(persisted.id, response.id.to_string());
        assert_eq!(persisted.document, dropset_document());
    }

    #[test]
    fn test_exercise_kinds_share_wire_names() {
        for (kind, ty) in [
            (ExerciseKind::Normal, ExerciseType::Normal),
            (ExerciseKind::Dropset, ExerciseType::Dropset),
        ] {
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::to_value(ty).unwrap()
            );
        }
    }
}
