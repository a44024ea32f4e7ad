use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    receipt_router, validate, ReceiptService, ReceiptSubmission, ScoreBreakdown, ScoreStore,
    ScoringEngine,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_receipt_routes<S>(service: Arc<ReceiptService<S>>) -> axum::Router
where
    S: ScoreStore + 'static,
{
    receipt_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/receipts/score", axum::routing::post(score_preview_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a receipt and explain each rule without recording it.
pub(crate) async fn score_preview_endpoint(
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    let Json(submission) = payload?;
    let receipt = validate(submission)?;
    Ok(Json(ScoringEngine::new().breakdown(&receipt)))
}
