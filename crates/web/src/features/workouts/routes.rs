use axum::{
    Router, middleware,
    routing::get,
};
use storage::Database;

use super::handlers::{
    create_workout, delete_workout, get_workout, list_workouts, recent_workouts,
    update_workout, workout_calendar, workout_stats,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/recent", get(recent_workouts))
        .route("/stats/summary", get(workout_stats))
        .route("/calendar", get(workout_calendar))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
