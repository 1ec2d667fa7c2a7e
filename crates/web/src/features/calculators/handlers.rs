use axum::{
    Json,
    response::{IntoResponse, Response},
};
use validator::Validate;

use super::{
    dto::{
        BmrRequest, BmrResponse, IdealWeightRequest, IdealWeightResponse, OneRepMaxRequest,
        OneRepMaxResponse, PlatesRequest, PlatesResponse,
    },
    services,
};
use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/calculators/one-rep-max",
    request_body = OneRepMaxRequest,
    responses(
        (status = 200, description = "Estimated one-rep max with training percentages", body = OneRepMaxResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "calculators"
)]
pub async fn one_rep_max(Json(req): Json<OneRepMaxRequest>) -> Result<Response, WebError> {
    req.validate()?;

    Ok(Json(services::estimate_one_rep_max(&req)?).into_response())
}

#[utoipa::path(
    post,
    path = "/api/calculators/bmr",
    request_body = BmrRequest,
    responses(
        (status = 200, description = "Basal metabolic rate and daily energy expenditure", body = BmrResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "calculators"
)]
pub async fn bmr(Json(req): Json<BmrRequest>) -> Result<Response, WebError> {
    req.validate()?;

    Ok(Json(services::estimate_bmr(&req)?).into_response())
}

#[utoipa::path(
    post,
    path = "/api/calculators/plates",
    request_body = PlatesRequest,
    responses(
        (status = 200, description = "Plates to load on each side", body = PlatesResponse),
        (status = 400, description = "Target below bar weight")
    ),
    tag = "calculators"
)]
pub async fn plates(Json(req): Json<PlatesRequest>) -> Result<Response, WebError> {
    Ok(Json(services::load_plates(&req)?).into_response())
}

#[utoipa::path(
    post,
    path = "/api/calculators/ideal-weight",
    request_body = IdealWeightRequest,
    responses(
        (status = 200, description = "Ideal body weight by formula", body = IdealWeightResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "calculators"
)]
pub async fn ideal_weight(Json(req): Json<IdealWeightRequest>) -> Result<Response, WebError> {
    req.validate()?;

    Ok(Json(services::estimate_ideal_weight(&req)?).into_response())
}
