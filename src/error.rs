use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors returned by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Both deliveries and returns lists must not be empty")]
    EmptyStops,

    #[error("Each {0} must have 'id', 'lat', and 'lon' fields")]
    MissingStopFields(&'static str),

    #[error("Invalid {kind}: {reason}")]
    InvalidStop { kind: &'static str, reason: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Too many stops: {given} exceeds the limit of {limit}")]
    TooManyStops { given: usize, limit: usize },

    #[error("Pairing was interrupted")]
    Interrupted(#[from] error::BlockingError),
}

impl ApiError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::EmptyStops => "empty_stops",
            ApiError::MissingStopFields(_) => "missing_stop_fields",
            ApiError::InvalidStop { .. } => "invalid_stop",
            ApiError::Validation(_) => "validation_failed",
            ApiError::TooManyStops { .. } => "too_many_stops",
            ApiError::Interrupted(_) => "internal_error",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::TooManyStops { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Interrupted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}
