use crate::error::Error;
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub title: String,
    pub status: u16,
    pub detail: String,
}

/// Turns pipeline errors and bad requests into HTTP responses without leaking
/// upstream details.
#[derive(Debug)]
pub enum ApiError {
    Pipeline(Error),
    BadRequest(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Pipeline(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => {
                warn!(detail = %detail, "Rejected request");
                (StatusCode::BAD_REQUEST, detail)
            }
            ApiError::Pipeline(err) if err.is_not_found() => {
                warn!(error = %err, "Nothing to show");
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Pipeline(err) => {
                error!(error = %err.report(), "Upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream request failed".to_string(),
                )
            }
        };

        let body = ErrorBody {
            title: status.canonical_reason().unwrap_or_default().to_string(),
            status: status.as_u16(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}
