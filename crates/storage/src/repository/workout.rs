use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutStats, WorkoutSummary};
use crate::error::{Result, StorageError};
use crate::models::Workout;

const WORKOUT_COLUMNS: &str = "id, user_id, name, date, duration, rest_time, exercises, \
     calories_burned, is_draft, created_at, updated_at";

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of the user's workouts, newest date first, plus the total count.
    pub async fn list(&self, user_id: Uuid, params: &PaginationParams) -> Result<(Vec<Workout>, i64)> {
        let sql = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts \
             WHERE user_id = $1 \
             ORDER BY date DESC, created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        let workouts = sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;

        Ok((workouts, total))
    }

    /// Latest finished (non-draft) workouts.
    pub async fn recent(&self, user_id: Uuid, limit: i64) -> Result<Vec<WorkoutSummary>> {
        let summaries = sqlx::query_as::<_, WorkoutSummary>(
            r#"
            SELECT id, name, date, duration,
                   jsonb_array_length(exercises) AS exercise_count
            FROM workouts
            WHERE user_id = $1 AND is_draft = FALSE
            ORDER BY date DESC, created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(summaries)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Workout> {
        let sql = format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Workout>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, user_id: Uuid, req: &CreateWorkoutRequest) -> Result<Workout> {
        let sql = format!(
            "INSERT INTO workouts \
                 (user_id, name, date, duration, rest_time, exercises, calories_burned, is_draft) \
             VALUES ($1, $2, COALESCE($3::date, CURRENT_DATE), $4, $5, $6, $7, $8) \
             RETURNING {WORKOUT_COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(&req.name)
            .bind(req.date)
            .bind(req.duration)
            .bind(req.rest_time)
            .bind(Json(&req.exercises))
            .bind(req.calories_burned)
            .bind(req.is_draft)
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from_write)
    }

    /// Writes the fields present in `req` over `existing`.
    pub async fn update(
        &self,
        existing: &Workout,
        req: &UpdateWorkoutRequest,
    ) -> Result<Workout> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let date = req.date.unwrap_or(existing.date);
        let duration = req.duration.unwrap_or(existing.duration);
        let rest_time = req.rest_time.unwrap_or(existing.rest_time);
        let exercises = req.exercises.as_ref().unwrap_or(&existing.exercises.0);
        let calories_burned = req.calories_burned.unwrap_or(existing.calories_burned);
        let is_draft = req.is_draft.unwrap_or(existing.is_draft);

        let sql = format!(
            "UPDATE workouts \
             SET name = $3, date = $4, duration = $5, rest_time = $6, exercises = $7, \
                 calories_burned = $8, is_draft = $9, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {WORKOUT_COLUMNS}"
        );
        sqlx::query_as::<_, Workout>(&sql)
            .bind(existing.id)
            .bind(existing.user_id)
            .bind(name)
            .bind(date)
            .bind(duration)
            .bind(rest_time)
            .bind(Json(exercises))
            .bind(calories_burned)
            .bind(is_draft)
            .fetch_optional(self.pool)
            .await
            .map_err(StorageError::from_write)?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn stats(&self, user_id: Uuid) -> Result<WorkoutStats> {
        let stats = sqlx::query_as::<_, WorkoutStats>(
            r#"
            SELECT COUNT(*)::bigint AS total_workouts,
                   COALESCE(SUM(jsonb_array_length(exercises)), 0)::bigint AS total_exercises,
                   COALESCE(SUM(duration), 0)::bigint AS total_duration,
                   COALESCE(SUM(calories_burned), 0)::bigint AS total_calories
            FROM workouts
            WHERE user_id = $1 AND is_draft = FALSE
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(stats)
    }

    /// Non-draft workouts dated in `[from, to)`, oldest first.
    pub async fn in_range(&self, user_id: Uuid, from: NaiveDate, to: NaiveDate) -> Result<Vec<Workout>> {
        let sql = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts \
             WHERE user_id = $1 AND is_draft = FALSE AND date >= $2 AND date < $3 \
             ORDER BY date, created_at"
        );
        let workouts = sqlx::query_as::<_, Workout>(&sql)
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(self.pool)
            .await?;

        Ok(workouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseType, WorkoutExercise, WorkoutSet};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn request(name: &str, date: NaiveDate, exercise_count: usize, is_draft: bool) -> CreateWorkoutRequest {
        let exercises = (0..exercise_count)
            .map(|i| WorkoutExercise {
                name: format!("Упражнение {}", i + 1),
                kind: ExerciseType::Normal,
                sets: vec![WorkoutSet {
                    weight: 60.0,
                    reps: 10,
                    drops: Vec::new(),
                }],
            })
            .collect();

        CreateWorkoutRequest {
            name: name.to_string(),
            date: Some(date),
            duration: 1800,
            rest_time: 90,
            exercises,
            calories_burned: 200,
            is_draft,
        }
    }

    async fn seed(repo: &WorkoutRepository<'_>, user_id: Uuid) {
        repo.create(user_id, &request("Январь", date(2026, 1, 10), 2, false))
            .await
            .unwrap();
        repo.create(user_id, &request("Февраль", date(2026, 2, 3), 3, false))
            .await
            .unwrap();
        repo.create(user_id, &request("Черновик", date(2026, 2, 5), 4, true))
            .await
            .unwrap();
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_stats_skip_drafts(pool: PgPool) {
        let repo = WorkoutRepository::new(&pool);
        let user_id = Uuid::new_v4();
        seed(&repo, user_id).await;

        let stats = repo.stats(user_id).await.unwrap();
        assert_eq!(stats.total_workouts, 2);
        assert_eq!(stats.total_exercises, 5);
        assert_eq!(stats.total_duration, 3600);
        assert_eq!(stats.total_calories, 400);

        let other = repo.stats(Uuid::new_v4()).await.unwrap();
        assert_eq!(other.total_workouts, 0);
        assert_eq!(other.total_calories, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_recent_is_newest_first_without_drafts(pool: PgPool) {
        let repo = WorkoutRepository::new(&pool);
        let user_id = Uuid::new_v4();
        seed(&repo, user_id).await;

        let recent = repo.recent(user_id, 5).await.unwrap();
        let names: Vec<&str> = recent.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Февраль", "Январь"]);
        assert_eq!(recent[0].exercise_count, 3);
        assert_eq!(recent[1].exercise_count, 2);

        let limited = repo.recent(user_id, 1).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].name, "Февраль");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_in_range_returns_finished_workouts_of_the_month(pool: PgPool) {
        let repo = WorkoutRepository::new(&pool);
        let user_id = Uuid::new_v4();
        seed(&repo, user_id).await;

        let february = repo
            .in_range(user_id, date(2026, 2, 1), date(2026, 3, 1))
            .await
            .unwrap();
        assert_eq!(february.len(), 1);
        assert_eq!(february[0].name, "Февраль");
        assert_eq!(february[0].exercises.0.len(), 3);

        let january = repo
            .in_range(user_id, date(2026, 1, 1), date(2026, 2, 1))
            .await
            .unwrap();
        assert_eq!(january.len(), 1);
        assert_eq!(january[0].name, "Январь");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_counts_drafts_and_scopes_by_user(pool: PgPool) {
        let repo = WorkoutRepository::new(&pool);
        let user_id = Uuid::new_v4();
        seed(&repo, user_id).await;

        let (workouts, total) = repo.list(user_id, &PaginationParams::default()).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(workouts[0].name, "Черновик");

        let someone_else = Uuid::new_v4();
        let result = repo.find_by_id(someone_else, workouts[0].id).await;
        assert!(matches!(result, Err(StorageError::NotFound)));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_merges_present_fields(pool: PgPool) {
        let repo = WorkoutRepository::new(&pool);
        let user_id = Uuid::new_v4();
        let created = repo
            .create(user_id, &request("Ноги", date(2026, 3, 2), 1, true))
            .await
            .unwrap();

        let update = UpdateWorkoutRequest {
            is_draft: Some(false),
            ..Default::default()
        };
        let updated = repo.update(&created, &update).await.unwrap();

        assert!(!updated.is_draft);
        assert_eq!(updated.name, "Ноги");
        assert_eq!(updated.exercises.0, created.exercises.0);
    }
}
