use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::{
    dto::measurement::{
        BodyMeasurementRequest, CreateProgressPhotoRequest, CreateWeightEntryRequest,
        MeasurementChangesResponse, UpdateWeightEntryRequest,
    },
    error::Result,
    models::{BodyMeasurement, BodyMeasurementField, ProgressPhoto, WeightEntry},
    repository::measurement::MeasurementRepository,
    services::measurement_changes::latest_changes,
};
use uuid::Uuid;

// Weight entries

pub async fn list_weight_entries(pool: &PgPool, user_id: Uuid) -> Result<Vec<WeightEntry>> {
    let repo = MeasurementRepository::new(pool);
    repo.list_weight(user_id).await
}

pub async fn get_weight_entry(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<WeightEntry> {
    let repo = MeasurementRepository::new(pool);
    repo.find_weight(user_id, id).await
}

pub async fn create_weight_entry(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateWeightEntryRequest,
) -> Result<WeightEntry> {
    let repo = MeasurementRepository::new(pool);
    repo.create_weight(user_id, request).await
}

pub async fn update_weight_entry(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &UpdateWeightEntryRequest,
) -> Result<WeightEntry> {
    let repo = MeasurementRepository::new(pool);
    let existing = repo.find_weight(user_id, id).await?;
    repo.update_weight(&existing, request).await
}

pub async fn delete_weight_entry(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = MeasurementRepository::new(pool);
    repo.delete_weight(user_id, id).await
}

// Body measurements

pub async fn list_body_measurements(pool: &PgPool, user_id: Uuid) -> Result<Vec<BodyMeasurement>> {
    let repo = MeasurementRepository::new(pool);
    repo.list_body(user_id).await
}

pub async fn get_body_measurement(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<BodyMeasurement> {
    let repo = MeasurementRepository::new(pool);
    repo.find_body(user_id, id).await
}

pub async fn create_body_measurement(
    pool: &PgPool,
    user_id: Uuid,
    request: &BodyMeasurementRequest,
) -> Result<BodyMeasurement> {
    let repo = MeasurementRepository::new(pool);
    repo.create_body(user_id, request).await
}

pub async fn update_body_measurement(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &BodyMeasurementRequest,
) -> Result<BodyMeasurement> {
    let repo = MeasurementRepository::new(pool);
    let existing = repo.find_body(user_id, id).await?;
    repo.save_body(&request.merge_into(&existing)).await
}

pub async fn update_body_field(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    field: BodyMeasurementField,
    value: Option<Decimal>,
) -> Result<BodyMeasurement> {
    let repo = MeasurementRepository::new(pool);
    repo.set_body_field(user_id, id, field, value).await
}

pub async fn delete_body_measurement(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = MeasurementRepository::new(pool);
    repo.delete_body(user_id, id).await
}

/// Differences between the two most recent measurements
pub async fn body_changes(pool: &PgPool, user_id: Uuid) -> Result<MeasurementChangesResponse> {
    let repo = MeasurementRepository::new(pool);
    let latest = repo.latest_body(user_id, Some(2)).await?;
    Ok(latest_changes(&latest))
}

// Progress photos

pub async fn list_progress_photos(pool: &PgPool, user_id: Uuid) -> Result<Vec<ProgressPhoto>> {
    let repo = MeasurementRepository::new(pool);
    repo.list_photos(user_id).await
}

pub async fn create_progress_photo(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateProgressPhotoRequest,
) -> Result<ProgressPhoto> {
    let repo = MeasurementRepository::new(pool);
    repo.create_photo(user_id, request).await
}

pub async fn delete_progress_photo(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = MeasurementRepository::new(pool);
    repo.delete_photo(user_id, id).await
}
