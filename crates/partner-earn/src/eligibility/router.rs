use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::evaluation::EvaluationResult;
use super::request::EvaluationRequest;
use super::service::EligibilityService;
use crate::error::AppError;

/// Router builder exposing the eligibility endpoints.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/evaluate", post(evaluate_handler))
        .route("/api/v1/eligibility/partners", get(partners_handler))
        .route("/api/v1/eligibility/regions", get(regions_handler))
        .with_state(service)
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<EligibilityService>>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, AppError> {
    let Json(request) = payload?;
    let result = service.evaluate_request(request)?;
    Ok(Json(result))
}

pub(crate) async fn partners_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    (StatusCode::OK, Json(service.partners())).into_response()
}

pub(crate) async fn regions_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    (StatusCode::OK, Json(service.regions().to_vec())).into_response()
}
