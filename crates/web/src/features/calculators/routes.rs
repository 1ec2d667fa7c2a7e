use axum::{Router, routing::post};
use storage::Database;

use super::handlers::{bmr, ideal_weight, one_rep_max, plates};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/one-rep-max", post(one_rep_max))
        .route("/bmr", post(bmr))
        .route("/plates", post(plates))
        .route("/ideal-weight", post(ideal_weight))
}
