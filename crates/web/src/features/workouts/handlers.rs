use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        workout::{
            CalendarQuery, CreateWorkoutRequest, RecentQuery, UpdateWorkoutRequest, WorkoutResponse,
            WorkoutStats, WorkoutSummary,
        },
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::WebError, middleware::auth::AuthUser};

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Workouts retrieved successfully", body = PaginatedResponse<WorkoutResponse>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let page = services::list_workouts(db.pool(), user_id, &params).await?;

    Ok(Json(page.map(WorkoutResponse::from)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/recent",
    params(RecentQuery),
    responses(
        (status = 200, description = "Latest finished workouts", body = Vec<WorkoutSummary>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn recent_workouts(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(query): Query<RecentQuery>,
) -> Result<Response, WebError> {
    let summaries = services::recent_workouts(db.pool(), user_id, query.limit).await?;

    Ok(Json(summaries).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/stats/summary",
    responses(
        (status = 200, description = "Totals over finished workouts", body = WorkoutStats),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn workout_stats(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let stats = services::workout_stats(db.pool(), user_id).await?;

    Ok(Json(stats).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Finished workouts in the month", body = Vec<WorkoutResponse>),
        (status = 400, description = "Invalid month"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn workout_calendar(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, WebError> {
    let workouts = services::workouts_in_month(db.pool(), user_id, query.year, query.month).await?;

    let response: Vec<WorkoutResponse> = workouts.into_iter().map(WorkoutResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(db.pool(), user_id, id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout saved", body = WorkoutResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let workout = services::create_workout(db.pool(), user_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "Workout updated", body = WorkoutResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateWorkoutRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let workout = services::update_workout(db.pool(), user_id, id, &payload).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_workout(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
