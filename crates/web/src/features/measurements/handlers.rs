use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::measurement::{
        BodyMeasurementRequest, BodyMeasurementResponse, CreateProgressPhotoRequest,
        CreateWeightEntryRequest, MeasurementChangesResponse, MeasurementFieldUpdate,
        ProgressPhotoResponse, UpdateWeightEntryRequest, WeightEntryResponse,
    },
    models::BodyMeasurementField,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::WebError, middleware::auth::AuthUser};

use super::services;

// Weight entries

#[utoipa::path(
    get,
    path = "/api/measurements/weight",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Weight log, newest first", body = Vec<WeightEntryResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn list_weight_entries(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let entries = services::list_weight_entries(db.pool(), user_id).await?;

    let response: Vec<WeightEntryResponse> =
        entries.into_iter().map(WeightEntryResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/measurements/weight/{id}",
    params(
        ("id" = Uuid, Path, description = "Weight entry ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Weight entry found", body = WeightEntryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Weight entry not found")
    ),
    tag = "measurements"
)]
pub async fn get_weight_entry(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entry = services::get_weight_entry(db.pool(), user_id, id).await?;

    Ok(Json(WeightEntryResponse::from(entry)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/measurements/weight",
    request_body = CreateWeightEntryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Weight entry created", body = WeightEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn create_weight_entry(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<CreateWeightEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::create_weight_entry(db.pool(), user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(WeightEntryResponse::from(entry))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/measurements/weight/{id}",
    params(
        ("id" = Uuid, Path, description = "Weight entry ID")
    ),
    request_body = UpdateWeightEntryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Weight entry updated", body = WeightEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Weight entry not found")
    ),
    tag = "measurements"
)]
pub async fn update_weight_entry(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWeightEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::update_weight_entry(db.pool(), user_id, id, &req).await?;

    Ok(Json(WeightEntryResponse::from(entry)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/measurements/weight/{id}",
    params(
        ("id" = Uuid, Path, description = "Weight entry ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Weight entry deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Weight entry not found")
    ),
    tag = "measurements"
)]
pub async fn delete_weight_entry(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_weight_entry(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// Body measurements

#[utoipa::path(
    get,
    path = "/api/measurements/body",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Body measurements, newest first", body = Vec<BodyMeasurementResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn list_body_measurements(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let measurements = services::list_body_measurements(db.pool(), user_id).await?;

    let response: Vec<BodyMeasurementResponse> = measurements
        .into_iter()
        .map(BodyMeasurementResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/measurements/body/{id}",
    params(
        ("id" = Uuid, Path, description = "Body measurement ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Body measurement found", body = BodyMeasurementResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Body measurement not found")
    ),
    tag = "measurements"
)]
pub async fn get_body_measurement(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let measurement = services::get_body_measurement(db.pool(), user_id, id).await?;

    Ok(Json(BodyMeasurementResponse::from(measurement)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/measurements/body",
    request_body = BodyMeasurementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Body measurement created", body = BodyMeasurementResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn create_body_measurement(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<BodyMeasurementRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let measurement = services::create_body_measurement(db.pool(), user_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BodyMeasurementResponse::from(measurement)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/measurements/body/{id}",
    params(
        ("id" = Uuid, Path, description = "Body measurement ID")
    ),
    request_body = BodyMeasurementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Body measurement updated", body = BodyMeasurementResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Body measurement not found")
    ),
    tag = "measurements"
)]
pub async fn update_body_measurement(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<BodyMeasurementRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let measurement = services::update_body_measurement(db.pool(), user_id, id, &req).await?;

    Ok(Json(BodyMeasurementResponse::from(measurement)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/measurements/body/{id}/fields/{field}",
    params(
        ("id" = Uuid, Path, description = "Body measurement ID"),
        ("field" = BodyMeasurementField, Path, description = "Measurement site, e.g. biceps")
    ),
    request_body = MeasurementFieldUpdate,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Field updated", body = BodyMeasurementResponse),
        (status = 400, description = "Unknown field or invalid value"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Body measurement not found")
    ),
    tag = "measurements"
)]
pub async fn update_body_field(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path((id, field)): Path<(Uuid, String)>,
    Json(req): Json<MeasurementFieldUpdate>,
) -> Result<Response, WebError> {
    let field: BodyMeasurementField = field.parse().map_err(WebError::BadRequest)?;
    req.validate()?;

    let measurement =
        services::update_body_field(db.pool(), user_id, id, field, req.value).await?;

    Ok(Json(BodyMeasurementResponse::from(measurement)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/measurements/body/{id}",
    params(
        ("id" = Uuid, Path, description = "Body measurement ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Body measurement deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Body measurement not found")
    ),
    tag = "measurements"
)]
pub async fn delete_body_measurement(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_body_measurement(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/measurements/body/changes",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Per-site change between the two latest measurements", body = MeasurementChangesResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn body_changes(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let changes = services::body_changes(db.pool(), user_id).await?;

    Ok(Json(changes).into_response())
}

// Progress photos

#[utoipa::path(
    get,
    path = "/api/measurements/photos",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Progress photos, newest first", body = Vec<ProgressPhotoResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn list_progress_photos(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let photos = services::list_progress_photos(db.pool(), user_id).await?;

    let response: Vec<ProgressPhotoResponse> =
        photos.into_iter().map(ProgressPhotoResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/measurements/photos",
    request_body = CreateProgressPhotoRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Progress photo stored", body = ProgressPhotoResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "measurements"
)]
pub async fn create_progress_photo(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<CreateProgressPhotoRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let photo = services::create_progress_photo(db.pool(), user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(ProgressPhotoResponse::from(photo))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/measurements/photos/{id}",
    params(
        ("id" = Uuid, Path, description = "Progress photo ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Progress photo deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Progress photo not found")
    ),
    tag = "measurements"
)]
pub async fn delete_progress_photo(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_progress_photo(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
