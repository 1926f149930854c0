//! API error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use waymark_core::Error;
use waymark_geodata::GeoDataError;

/// Result alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An error ready to be rendered as an HTTP response.
///
/// Bodies are `{"message": ...}` JSON, matching what the frontend
/// expects on every non-success status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        let status = match &e {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::GeoData(_) | Error::Repository(_) | Error::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl From<GeoDataError> for ApiError {
    fn from(e: GeoDataError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("API error: {}", self.message);
        }
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}
