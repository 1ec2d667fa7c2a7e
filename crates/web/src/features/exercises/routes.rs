use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    create_custom_exercise, delete_custom_exercise, list_custom_exercises, list_exercises,
    update_custom_exercise,
};
use crate::middleware::auth::{ApiKeys, optional_auth, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/custom", get(list_custom_exercises))
        .route("/", post(create_custom_exercise))
        .route(
            "/:id",
            put(update_custom_exercise).delete(delete_custom_exercise),
        )
        .route_layer(middleware::from_fn_with_state(api_keys.clone(), require_auth));

    Router::new()
        .route("/", get(list_exercises))
        .route_layer(middleware::from_fn_with_state(api_keys, optional_auth))
        .merge(protected)
}
