use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, warn};

use super::domain::{PointsView, ReceiptId, ReceiptIdView, ReceiptSubmission};
use super::service::{ReceiptService, ReceiptServiceError};
use super::store::{ScoreStore, StoreError};

/// Router builder exposing the receipt submission and points lookup endpoints.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ScoreStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:id/points", get(points_handler::<S>))
        // Historical lookup path kept for older clients.
        .route("/receipts/:id/process", get(points_handler::<S>))
        .with_state(service)
}

pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Response
where
    S: ScoreStore + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let reason = rejection.body_text();
            warn!(%reason, "receipt payload could not be decoded");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("malformed receipt payload: {reason}"),
            );
        }
    };

    match service.process(submission) {
        Ok(processed) => {
            info!(id = %processed.id, points = processed.points, "receipt processed");
            (StatusCode::OK, Json(ReceiptIdView { id: processed.id })).into_response()
        }
        Err(ReceiptServiceError::Validation(err)) => {
            warn!(field = err.field(), error = %err, "receipt rejected");
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(other) => {
            error!(error = %other, "receipt could not be stored");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: ScoreStore + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(PointsView { points })).into_response(),
        Err(ReceiptServiceError::Store(err @ StoreError::NotFound(_))) => {
            warn!(%id, "points requested for unknown receipt");
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
        Err(other) => {
            error!(%id, error = %other, "points lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
