use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::exercise::{
        CreateCustomExerciseRequest, CustomExerciseResponse, ExerciseListItem,
        UpdateCustomExerciseRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::WebError, middleware::auth::AuthUser};

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises",
    security(
        (),
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Built-in exercises, plus the caller's own when authenticated", body = Vec<ExerciseListItem>)
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    auth: Option<Extension<AuthUser>>,
) -> Result<Response, WebError> {
    let user_id = auth.map(|Extension(AuthUser(user_id))| user_id);

    let exercises = services::list_exercises(db.pool(), user_id).await?;

    Ok(Json(exercises).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercises/custom",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's custom exercises", body = Vec<CustomExerciseResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercises"
)]
pub async fn list_custom_exercises(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let exercises = services::list_custom_exercises(db.pool(), user_id).await?;

    let response: Vec<CustomExerciseResponse> = exercises
        .into_iter()
        .map(CustomExerciseResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = CreateCustomExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Custom exercise created", body = CustomExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "exercises"
)]
pub async fn create_custom_exercise(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<CreateCustomExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::create_custom_exercise(db.pool(), user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(CustomExerciseResponse::from(exercise))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Custom exercise ID")
    ),
    request_body = UpdateCustomExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Custom exercise updated", body = CustomExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Custom exercise not found")
    ),
    tag = "exercises"
)]
pub async fn update_custom_exercise(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCustomExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::update_custom_exercise(db.pool(), user_id, id, &req).await?;

    Ok(Json(CustomExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Custom exercise ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Custom exercise deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Custom exercise not found")
    ),
    tag = "exercises"
)]
pub async fn delete_custom_exercise(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_custom_exercise(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
