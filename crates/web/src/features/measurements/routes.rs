use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};
use storage::Database;

use super::handlers::{
    body_changes, create_body_measurement, create_progress_photo, create_weight_entry,
    delete_body_measurement, delete_progress_photo, delete_weight_entry, get_body_measurement,
    get_weight_entry, list_body_measurements, list_progress_photos, list_weight_entries,
    update_body_field, update_body_measurement, update_weight_entry,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/weight", get(list_weight_entries).post(create_weight_entry))
        .route(
            "/weight/:id",
            get(get_weight_entry)
                .put(update_weight_entry)
                .delete(delete_weight_entry),
        )
        .route("/body", get(list_body_measurements).post(create_body_measurement))
        .route("/body/changes", get(body_changes))
        .route(
            "/body/:id",
            get(get_body_measurement)
                .put(update_body_measurement)
                .delete(delete_body_measurement),
        )
        .route("/body/:id/fields/:field", patch(update_body_field))
        .route("/photos", get(list_progress_photos).post(create_progress_photo))
        .route("/photos/:id", delete(delete_progress_photo))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
