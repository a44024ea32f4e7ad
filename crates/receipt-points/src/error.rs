use crate::config::ConfigError;
use crate::receipts::{ReceiptServiceError, StoreError};
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Decode(serde_json::Error),
    Payload(JsonRejection),
    Receipt(ReceiptServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Decode(err) => write!(f, "malformed receipt payload: {}", err),
            AppError::Payload(err) => write!(f, "malformed receipt payload: {}", err.body_text()),
            AppError::Receipt(err) => write!(f, "receipt error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Decode(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Receipt(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Decode(_)
            | AppError::Payload(_)
            | AppError::Receipt(ReceiptServiceError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Receipt(ReceiptServiceError::Store(StoreError::NotFound(_))) => {
                StatusCode::NOT_FOUND
            }
            AppError::Receipt(ReceiptServiceError::Store(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::Payload(value)
    }
}

impl From<ReceiptServiceError> for AppError {
    fn from(value: ReceiptServiceError) -> Self {
        Self::Receipt(value)
    }
}

impl From<crate::receipts::ValidationError> for AppError {
    fn from(value: crate::receipts::ValidationError) -> Self {
        Self::Receipt(ReceiptServiceError::Validation(value))
    }
}
