use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::goal::{CreateGoalRequest, UpdateGoalRequest},
    error::Result,
    models::Goal,
    repository::goal::GoalRepository,
    services::goal_progress::resolve_completed_at,
};
use uuid::Uuid;

pub async fn list_goals(pool: &PgPool, user_id: Uuid) -> Result<Vec<Goal>> {
    let repo = GoalRepository::new(pool);
    repo.list(user_id).await
}

pub async fn get_goal(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<Goal> {
    let repo = GoalRepository::new(pool);
    repo.find_by_id(user_id, id).await
}

pub async fn create_goal(pool: &PgPool, user_id: Uuid, request: &CreateGoalRequest) -> Result<Goal> {
    let completed_at = resolve_completed_at(
        request.completed,
        request.completed_at,
        None,
        Utc::now().naive_utc(),
    );

    let repo = GoalRepository::new(pool);
    repo.create(user_id, request, completed_at).await
}

pub async fn update_goal(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &UpdateGoalRequest,
) -> Result<Goal> {
    let repo = GoalRepository::new(pool);
    let existing = repo.find_by_id(user_id, id).await?;

    let completed = request.completed.unwrap_or(existing.completed);
    let completed_at = resolve_completed_at(
        completed,
        request.completed_at,
        existing.completed_at,
        Utc::now().naive_utc(),
    );

    if completed && !existing.completed {
        tracing::info!("Goal {} marked completed", existing.id);
    }

    repo.update(&existing, request, completed_at).await
}

pub async fn delete_goal(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = GoalRepository::new(pool);
    repo.delete(user_id, id).await
}
