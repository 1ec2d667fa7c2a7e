use axum::{Router, middleware, routing::get};
use storage::Database;

use super::handlers::{create_goal, delete_goal, get_goal, list_goals, update_goal};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id", get(get_goal).put(update_goal).delete(delete_goal))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
