//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use terratrack_domain::error::{ConfigurationError, TerraTrackError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by API handlers.
#[derive(Debug)]
pub enum ApiError {
    Domain(TerraTrackError),
    /// No refresh cycle has completed yet.
    NoFrame,
}

impl From<TerraTrackError> for ApiError {
    fn from(err: TerraTrackError) -> Self {
        Self::Domain(err)
    }
}

impl From<ConfigurationError> for ApiError {
    fn from(err: ConfigurationError) -> Self {
        Self::Domain(err.into())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Domain(TerraTrackError::Configuration(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Domain(TerraTrackError::Presentation(err)) => {
                tracing::error!(error = %err, "presentation error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::NoFrame => (
                StatusCode::SERVICE_UNAVAILABLE,
                "no sensor frame generated yet".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
