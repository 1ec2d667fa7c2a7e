use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    error::WebError,
    features::{calculators, exercises, goals, health, measurements, workouts},
    middleware::auth::ApiKeys,
};

fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = frontend_url
        .trim_end_matches('/')
        .parse()
        .context("FRONTEND_URL is not a valid origin")?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600)))
}

async fn not_found() -> WebError {
    WebError::NotFound
}

pub fn build_router(db: Database, api_keys: ApiKeys, frontend_url: &str) -> Result<Router> {
    let api = Router::new()
        .nest("/health", health::routes::routes())
        .nest("/workouts", workouts::routes::routes(api_keys.clone()))
        .nest("/goals", goals::routes::routes(api_keys.clone()))
        .nest("/measurements", measurements::routes::routes(api_keys.clone()))
        .nest("/exercises", exercises::routes::routes(api_keys))
        .nest("/calculators", calculators::routes::routes());

    let router = Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(db);

    Ok(router)
}
