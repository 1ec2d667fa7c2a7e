use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::goal::{CreateGoalRequest, GoalResponse, UpdateGoalRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::WebError, middleware::auth::AuthUser};

use super::services;

#[utoipa::path(
    get,
    path = "/api/goals",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goals with their progress", body = Vec<GoalResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "goals"
)]
pub async fn list_goals(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let goals = services::list_goals(db.pool(), user_id).await?;

    let response: Vec<GoalResponse> = goals.into_iter().map(GoalResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal found", body = GoalResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn get_goal(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let goal = services::get_goal(db.pool(), user_id, id).await?;

    Ok(Json(GoalResponse::from(goal)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Goal created", body = GoalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "goals"
)]
pub async fn create_goal(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<CreateGoalRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let goal = services::create_goal(db.pool(), user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(GoalResponse::from(goal))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/goals/{id}",
    description = "Updates the fields present in the body. When the goal is completed, an explicit \
                   `completedAt` is stored as given; otherwise an existing completion stamp is kept \
                   and the current time is used only if there is none. Setting `completed` to false \
                   clears `completedAt`.",
    params(
        ("id" = Uuid, Path, description = "Goal ID")
    ),
    request_body = UpdateGoalRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Goal updated", body = GoalResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn update_goal(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateGoalRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_goal(db.pool(), user_id, id, &update_req).await?;

    Ok(Json(GoalResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn delete_goal(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_goal(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
