use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::goal::{CreateGoalRequest, UpdateGoalRequest};
use crate::error::{Result, StorageError};
use crate::models::Goal;

const GOAL_COLUMNS: &str = "id, user_id, title, description, target_value, current_value, unit, \
     deadline, color, category, completed, completed_at, created_at, updated_at";

pub struct GoalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        let sql = format!(
            "SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = $1 ORDER BY created_at DESC"
        );
        let goals = sqlx::query_as::<_, Goal>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(goals)
    }

    pub async fn find_by_id(&self, user_id: Uuid, id: Uuid) -> Result<Goal> {
        let sql = format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Goal>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreateGoalRequest,
        completed_at: Option<NaiveDateTime>,
    ) -> Result<Goal> {
        let sql = format!(
            "INSERT INTO goals \
                 (user_id, title, description, target_value, current_value, unit, deadline, \
                  color, category, completed, completed_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {GOAL_COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&sql)
            .bind(user_id)
            .bind(&req.title)
            .bind(&req.description)
            .bind(req.target_value)
            .bind(req.current_value)
            .bind(&req.unit)
            .bind(req.deadline)
            .bind(&req.color)
            .bind(req.category)
            .bind(req.completed)
            .bind(completed_at)
            .fetch_one(self.pool)
            .await
            .map_err(StorageError::from_write)
    }

    /// Merges `req` over `existing`. The completion stamp is decided by the caller.
    pub async fn update(
        &self,
        existing: &Goal,
        req: &UpdateGoalRequest,
        completed_at: Option<NaiveDateTime>,
    ) -> Result<Goal> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let description = req.description.as_ref().unwrap_or(&existing.description);
        let target_value = req.target_value.unwrap_or(existing.target_value);
        let current_value = req.current_value.unwrap_or(existing.current_value);
        let unit = req.unit.as_ref().unwrap_or(&existing.unit);
        let deadline = req.deadline.or(existing.deadline);
        let color = req.color.as_ref().unwrap_or(&existing.color);
        let category = req.category.unwrap_or(existing.category);
        let completed = req.completed.unwrap_or(existing.completed);

        let sql = format!(
            "UPDATE goals \
             SET title = $3, description = $4, target_value = $5, current_value = $6, \
                 unit = $7, deadline = $8, color = $9, category = $10, completed = $11, \
                 completed_at = $12, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {GOAL_COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&sql)
            .bind(existing.id)
            .bind(existing.user_id)
            .bind(title)
            .bind(description)
            .bind(target_value)
            .bind(current_value)
            .bind(unit)
            .bind(deadline)
            .bind(color)
            .bind(category)
            .bind(completed)
            .bind(completed_at)
            .fetch_optional(self.pool)
            .await
            .map_err(StorageError::from_write)?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
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
