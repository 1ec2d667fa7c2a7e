use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::exercise::{CreateCustomExerciseRequest, UpdateCustomExerciseRequest};
use crate::error::{Result, StorageError};
use crate::models::CustomExercise;

const EXERCISE_COLUMNS: &str = "id, user_id, name, muscle_group, description, video_url, \
     is_custom, met_value, created_at, updated_at";

pub struct ExerciseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The user's custom exercises, by name
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<CustomExercise>> {
        let sql = format!(
            "SELECT {EXERCISE_COLUMNS} FROM custom_exercises WHERE user_id = $1 ORDER BY name"
        );
        let exercises = sqlx::query_as::<_, CustomExercise>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(exercises)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<CustomExercise> {
        let sql = format!(
            "SELECT {EXERCISE_COLUMNS} FROM custom_exercises WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, CustomExercise>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, user_id: Uuid, req: &CreateCustomExerciseRequest) -> Result<CustomExercise> {
        let sql = format!(
            "INSERT INTO custom_exercises \
                 (user_id, name, muscle_group, description, video_url, is_custom, met_value) \
             VALUES ($1, $2, $3, $4, $5, TRUE, $6) \
             RETURNING {EXERCISE_COLUMNS}"
        );
        sqlx::query_as::<_, CustomExercise>(&sql)
            .bind(user_id)
            .bind(req.name.trim())
            .bind(req.muscle_group)
            .bind(&req.description)
            .bind(&req.video_url)
            .bind(req.met_value)
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from_write)
    }

    pub async fn update(
        &self,
        existing: &CustomExercise,
        req: &UpdateCustomExerciseRequest,
    ) -> Result<CustomExercise> {
        let name = req.name.as_deref().map(str::trim).unwrap_or(&existing.name);
        let muscle_group = req.muscle_group.unwrap_or(existing.muscle_group);
        let description = req.description.as_ref().unwrap_or(&existing.description);
        let video_url = req.video_url.as_ref().unwrap_or(&existing.video_url);
        let met_value = req.met_value.unwrap_or(existing.met_value);

        let sql = format!(
            "UPDATE custom_exercises \
             SET name = $3, muscle_group = $4, description = $5, video_url = $6, \
                 met_value = $7, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {EXERCISE_COLUMNS}"
        );
        sqlx::query_as::<_, CustomExercise>(&sql)
            .bind(existing.id)
            .bind(existing.user_id)
            .bind(name)
            .bind(muscle_group)
            .bind(description)
            .bind(video_url)
            .bind(met_value)
            .fetch_optional(self.pool)
            .await
            .map_err(StorageError::from_write)?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM custom_exercises WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
